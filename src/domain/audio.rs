use serde::Serialize;

/// Speaker role attached to one channel of a stereo recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    Agent,
    Customer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeakerChannel {
    pub channel: u8,
    pub role: SpeakerRole,
}

/// The fixed two-channel mapping this workflow uses for every recording:
/// channel 0 carries the agent, channel 1 the customer.
pub fn default_speaker_channels() -> [SpeakerChannel; 2] {
    [
        SpeakerChannel {
            channel: 0,
            role: SpeakerRole::Agent,
        },
        SpeakerChannel {
            channel: 1,
            role: SpeakerRole::Customer,
        },
    ]
}
