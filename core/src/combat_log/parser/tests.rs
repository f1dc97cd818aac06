use super::*;

const COMBAT_LINE: &str = "[ 2024.03.14 19:22:05 ] (combat) <color=0xff00ffff><b>567</b> <color=0x77ffffff><font size=10>to</font> <b><color=0xffffffff>[P-1]Bad Guy</b><font size=10><color=0x77ffffff> - Inferno Rage Compiler Error - Hits";

// parse_line
#[test]
fn test_parse_line_combat() {
    let event = parse_line(COMBAT_LINE).unwrap();

    assert_eq!(event.event_time, "2024.03.14 19:22:05");
    assert_eq!(event.event_type, "combat");
    assert_eq!(
        event.text,
        "567 to [P-1]Bad Guy - Inferno Rage Compiler Error - Hits"
    );
    assert!(event.location.is_empty());
}

#[test]
fn test_parse_line_notify() {
    let event =
        parse_line("[ 2024.03.14 19:20:00 ] (notify) Requested to dock at <b>Jita IV</b>").unwrap();

    assert_eq!(event.event_time, "2024.03.14 19:20:00");
    assert_eq!(event.event_type, "notify");
    assert_eq!(event.text, "Requested to dock at Jita IV");
}

#[test]
fn test_parse_line_bracketed_without_category() {
    let event = parse_line("[ 2024.03.14 19:20:00 ] plain <i>text</i>").unwrap();

    assert_eq!(event.event_time, "2024.03.14 19:20:00");
    assert_eq!(event.event_type, "unknown");
    assert_eq!(event.text, "plain text");
}

#[test]
fn test_parse_line_header_kept_verbatim() {
    let event = parse_line("  Listener: Some <Pilot>  ").unwrap();

    assert!(event.event_time.is_empty());
    assert_eq!(event.event_type, "unknown");
    // header lines are not markup stripped
    assert_eq!(event.text, "Listener: Some <Pilot>");
}

#[test]
fn test_parse_line_unterminated_timestamp() {
    let result = LogParser::default().parse_line(7, "[ 2024.03.14 19:20:00 (combat) 10 to X");
    assert_eq!(
        result,
        Err(ParseError::UnterminatedTimestamp { line_number: 7 })
    );
}

#[test]
fn test_parse_line_has_no_length_limit() {
    let name = "x".repeat(70 * 1024);
    let line = format!("[ 2024.03.14 19:20:00 ] (combat) 100 to {name} - Gun - Hits");
    let event = LogParser::new().parse_line(3, &line).unwrap();

    assert_eq!(event.event_type, "combat");
    assert_eq!(event.text.len(), line.len() - "[ 2024.03.14 19:20:00 ] (combat) ".len());
}

#[test]
fn test_split_category_unclosed_paren() {
    let (event_type, rest) = LogParser::split_category(" (combat 5 to X");
    assert_eq!(event_type, "unknown");
    assert_eq!(rest, " (combat 5 to X");
}

// parse
#[test]
fn test_parse_empty_input() {
    assert!(parse("").is_empty());
}

#[test]
fn test_parse_plain_lines() {
    let events = parse("ABC\nXYZ");

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.event_type == "unknown"));
    assert_eq!(events[0].text, "ABC");
    assert_eq!(events[1].text, "XYZ");
}

#[test]
fn test_parse_handles_crlf() {
    let events = parse("ABC\r\nXYZ\r\n");

    assert_eq!(events.len(), 2);
    assert_eq!(events[1].text, "XYZ");
}

#[test]
fn test_parse_skips_bad_lines_and_continues() {
    let text = "[ 2024.03.14 19:20:00 ] (combat) 10 to Rat - Hits\n\
                [ broken line\n\
                [ 2024.03.14 19:20:01 ] (combat) 20 from Rat - Hits";
    let doc = LogParser::default().parse_document(text);

    assert_eq!(doc.events.len(), 2);
    assert_eq!(doc.skipped_lines, 1);
    assert_eq!(doc.events[1].text, "20 from Rat - Hits");
}

#[test]
fn test_parse_tracks_location() {
    let text = "------------------------------------------------------------\n\
                [ 2024.03.14 19:00:00 ] (None) Undocking from Jita IV - Moon 4 - Caldari Navy Assembly Plant to Jita solar system.\n\
                [ 2024.03.14 19:05:00 ] (combat) 10 to Rat - Hits\n\
                [ 2024.03.14 19:10:00 ] (None) Jumping from Jita to Perimeter\n\
                [ 2024.03.14 19:11:00 ] (combat) 20 from Rat - Hits";
    let events = parse(text);

    let locations: Vec<&str> = events.iter().map(|e| e.location.as_str()).collect();
    assert_eq!(
        locations,
        vec![UNKNOWN_LOCATION, "Jita", "Jita", "Perimeter", "Perimeter"]
    );
}

#[test]
fn test_parse_preserves_order() {
    let text: String = (0..500)
        .map(|i| format!("[ 2024.03.14 19:20:00 ] (combat) {} to Rat - Hits\n", i + 1))
        .collect();
    let events = parse(&text);

    assert_eq!(events.len(), 500);
    for (i, event) in events.iter().enumerate() {
        assert!(event.text.starts_with(&format!("{} to", i + 1)));
    }
}

// listener
#[test]
fn test_listener_from_header() {
    let text = "------------------------------------------------------------\n\
                  Gamelog\n\
                  Listener: Kira Vesh\n\
                  Session Started: 2024.03.14 18:59:51\n\
                ------------------------------------------------------------\n\
                [ 2024.03.14 19:00:00 ] (notify) Listener: not a header";
    let events = parse(text);

    assert_eq!(listener(&events).as_deref(), Some("Kira Vesh"));
}

#[test]
fn test_listener_missing() {
    assert_eq!(listener(&parse("ABC\nXYZ")), None);
}
