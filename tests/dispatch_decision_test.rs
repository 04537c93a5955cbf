use audiohook::domain::{
    CallbackEnvelope, DecisionError, Disposition, OperationKind, decide,
};

fn envelope(json: &str) -> CallbackEnvelope {
    serde_json::from_str(json).unwrap()
}

#[test]
fn given_unknown_event_type_then_decision_is_ignore_event() {
    let decision = decide(envelope(r#"{"event":{"type":"audio.deleted"}}"#)).unwrap();

    assert_eq!(
        decision,
        Disposition::IgnoreUnknownEvent {
            kind: "audio.deleted".to_string()
        }
    );
}

#[test]
fn given_transload_completion_then_decision_is_submit_classification() {
    let decision = decide(envelope(
        r#"{"event":{"type":"operation.complete"},"data":{"operation":{"_id":"op-1","type":"transload-audio","parameters":{"audio_id":"audio-42"}}}}"#,
    ))
    .unwrap();

    assert_eq!(
        decision,
        Disposition::SubmitClassification {
            audio_id: "audio-42".to_string()
        }
    );
}

#[test]
fn given_classify_completion_then_decision_is_fetch_transcript() {
    let decision = decide(envelope(
        r#"{"event":{"type":"operation.complete"},"data":{"operation":{"_id":"op-2","type":"classify-transcript","parameters":{"audio_id":"audio-42"},"result":{"document":{"transcript":"doc-9"}}}}}"#,
    ))
    .unwrap();

    match decision {
        Disposition::FetchTranscript(operation) => {
            assert_eq!(operation.id, "op-2");
            assert_eq!(operation.kind, OperationKind::ClassifyTranscript);
        }
        other => panic!("expected FetchTranscript, got {:?}", other),
    }
}

#[test]
fn given_conflict_error_then_decision_still_dispatches() {
    let decision = decide(envelope(
        r#"{"event":{"type":"operation.complete"},"data":{"operation":{"_id":"op-1","type":"transload-audio","parameters":{"audio_id":"audio-42"},"error":{"code":409,"message":"already exists"}}}}"#,
    ))
    .unwrap();

    assert_eq!(
        decision,
        Disposition::SubmitClassification {
            audio_id: "audio-42".to_string()
        }
    );
}

#[test]
fn given_non_conflict_error_then_decision_is_report_failure() {
    let decision = decide(envelope(
        r#"{"event":{"type":"operation.complete"},"data":{"operation":{"_id":"op-1","type":"transload-audio","parameters":{"audio_id":"audio-42"},"error":{"code":500,"message":"worker crashed"}}}}"#,
    ))
    .unwrap();

    assert_eq!(
        decision,
        Disposition::ReportFailure {
            operation_id: "op-1".to_string(),
            code: 500,
            message: "worker crashed".to_string()
        }
    );
}

#[test]
fn given_unknown_operation_type_then_decision_is_ignore_operation() {
    let decision = decide(envelope(
        r#"{"event":{"type":"operation.complete"},"data":{"operation":{"_id":"op-1","type":"redact-audio","parameters":{"audio_id":"audio-42"}}}}"#,
    ))
    .unwrap();

    assert_eq!(
        decision,
        Disposition::IgnoreUnknownOperation {
            operation_id: "op-1".to_string(),
            kind: "redact-audio".to_string()
        }
    );
}

#[test]
fn given_completion_without_operation_then_decision_fails() {
    let result = decide(envelope(r#"{"event":{"type":"operation.complete"}}"#));

    assert_eq!(result, Err(DecisionError::MissingOperation));
}

#[test]
fn given_operation_without_audio_id_then_decision_fails() {
    let result = decide(envelope(
        r#"{"event":{"type":"operation.complete"},"data":{"operation":{"_id":"op-1","type":"transload-audio","parameters":{}}}}"#,
    ));

    assert_eq!(
        result,
        Err(DecisionError::MissingAudioId("op-1".to_string()))
    );
}
