// src/notify/format.rs
use super::Notification;
use crate::model::{BridgeRecord, BridgeState};

/// Plain substring removals applied in order before spaces become underscores.
/// Not word-aware: "th" and "st" are stripped from inside any word too.
const TOPIC_STRIP: [&str; 6] = [" Bridge", ",", "st", "nd", "3rd", "th"];

/// Push topic for a bridge: `"{location}_{name}"` with the strip list applied.
pub fn topic_for(location_label: &str, bridge_name: &str) -> String {
    let mut topic = format!("{location_label}_{bridge_name}");
    for pat in TOPIC_STRIP {
        topic = topic.replace(pat, "");
    }
    topic.replace(' ', "_")
}

/// Upper-case the first char of each whitespace-separated word, lower-case the rest.
pub fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_notification(record: &BridgeRecord, new_state: BridgeState) -> Notification {
    Notification {
        topic: topic_for(&record.location_label, &record.name),
        title: record.location_label.clone(),
        body: format!(
            "The {} is now {}",
            capitalize_words(&record.name),
            new_state.phrase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_strips_naively() {
        assert_eq!(topic_for("Seattle, Wa", "Ballard Bridge"), "Seattle_Wa_Ballard");
        assert_eq!(
            topic_for("Seattle, Wa", "Spokane St Swing Bridge"),
            "Seattle_Wa_Spokane_St_Swing"
        );
        assert_eq!(topic_for("Seattle, Wa", "1st Ave S Bridge"), "Seattle_Wa_1_Ave_S");
        // "st" and "th" go away inside unrelated words as well.
        assert_eq!(topic_for("Westhaven", "North Bridge"), "Wehaven_Nor");
    }

    #[test]
    fn body_uses_state_phrase() {
        let r = BridgeRecord::new("university bridge", BridgeState::Unknown, "Seattle, Wa");
        let n = format_notification(&r, BridgeState::Maintenance);
        assert_eq!(n.title, "Seattle, Wa");
        assert_eq!(n.body, "The University Bridge is now under maintenance");
        assert_eq!(n.topic, "Seattle_Wa_university_bridge");
    }

    #[test]
    fn capitalize_keeps_digits() {
        assert_eq!(capitalize_words("1 Ave S Bridge"), "1 Ave S Bridge");
        assert_eq!(capitalize_words("SOUTH park"), "South Park");
    }
}
