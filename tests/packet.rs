use aprsroute::{DecodeError, Packet};

#[test]
fn decodes_path_and_data() {
    let packet = Packet::decode("N0CALL>APRS,WIDE1-1,WIDE2-2:hello world").unwrap();
    assert_eq!(packet.from, "N0CALL");
    assert_eq!(packet.to, "APRS");
    assert_eq!(packet.path, vec!["WIDE1-1".to_string(), "WIDE2-2".to_string()]);
    assert_eq!(packet.data, "hello world");
}

#[test]
fn decodes_with_empty_path() {
    let packet = Packet::decode("N0CALL>APRS:data").unwrap();
    assert!(packet.path.is_empty());
}

#[test]
fn preserves_empty_path_tokens() {
    let packet = Packet::decode("N0CALL>APRS,,WIDE1-1:data").unwrap();
    assert_eq!(packet.path, vec!["".to_string(), "WIDE1-1".to_string()]);
}

#[test]
fn colon_inside_data_is_kept() {
    let packet = Packet::decode("N0CALL>APRS,WIDE1-1:time: 12:00").unwrap();
    assert_eq!(packet.data, "time: 12:00");
}

#[test]
fn missing_separator_is_malformed() {
    assert_eq!(
        Packet::decode("N0CALLAPRS:data"),
        Err(DecodeError::MalformedHeader {
            input: "N0CALLAPRS:data".to_string()
        })
    );
}

#[test]
fn missing_colon_is_malformed() {
    assert!(Packet::decode("N0CALL>APRS,WIDE1-1").is_err());
}

#[test]
fn encode_round_trips_a_canonical_string() {
    let original = "N0CALL>APRS,WIDE1-1,WIDE2-2:hello";
    let packet = Packet::decode(original).unwrap();
    assert_eq!(packet.encode(), original);
}

#[test]
fn encode_omits_comma_for_empty_path() {
    let packet = Packet::new("N0CALL", "APRS", vec![], "data");
    assert_eq!(packet.encode(), "N0CALL>APRS:data");
}
