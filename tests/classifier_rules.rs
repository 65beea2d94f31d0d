// tests/classifier_rules.rs
use bridge_watch::classify::MAINTENANCE_KEYWORDS;
use bridge_watch::{classify, BridgeState};

#[test]
fn every_keyword_alone_is_maintenance_in_any_case() {
    for kw in MAINTENANCE_KEYWORDS {
        assert_eq!(classify(kw), BridgeState::Maintenance, "{kw}");
        assert_eq!(classify(&kw.to_uppercase()), BridgeState::Maintenance, "{kw}");
    }
}

#[test]
fn closed_open_and_fallback() {
    let cases = [
        ("Ballard Bridge: Closed", BridgeState::Up),
        ("University Bridge CLOSED to marine traffic", BridgeState::Up),
        ("Fremont Bridge is open for vessel traffic", BridgeState::Down),
        ("Montlake Bridge Opening", BridgeState::Down),
        ("South Park Bridge delays expected", BridgeState::Unknown),
        ("Fremont Bridge maintenance", BridgeState::Unknown),
    ];
    for (text, want) in cases {
        assert_eq!(classify(text), want, "{text}");
    }
}

#[test]
fn classification_is_deterministic() {
    let t = "1st Ave S Bridge open";
    assert_eq!(classify(t), classify(t));
}
