use aprsroute::{Packet, RouterSettings, RoutingOptions, RoutingState};

fn route_str(station: &str, aliases: &[&str], patterns: &[&str], options: RoutingOptions, input: &str) -> (RoutingState, String) {
    let packet = Packet::decode(input).unwrap();
    let settings = RouterSettings::new(station, aliases.to_vec(), patterns.to_vec(), options, false);
    let result = aprsroute::route(&packet, &settings);
    (result.state, result.routed_packet.encode())
}

#[test]
fn basic_n_n_decrement_and_insert() {
    let (state, out) = route_str(
        "DIGI",
        &[],
        &["WIDE1"],
        RoutingOptions::NONE,
        "N0CALL>APRS,WIDE1-3:data",
    );
    assert_eq!(state, RoutingState::Routed);
    assert_eq!(out, "N0CALL>APRS,DIGI*,WIDE1-2:data");
}

#[test]
fn n_n_substitute_on_zero_hops() {
    let (state, out) = route_str(
        "DIGI",
        &[],
        &["WIDE1"],
        RoutingOptions::SUBSTITUTE_COMPLETE_HOPS,
        "FROM>TO,,WIDE1-1:data",
    );
    assert_eq!(state, RoutingState::Routed);
    assert_eq!(out, "FROM>TO,,DIGI*:data");
}

#[test]
fn already_routed_by_us_is_unchanged() {
    let input = "N0CALL>APRS,CALL,DIGI*,WIDE1-1:data";
    let (state, out) = route_str("DIGI", &[], &["WIDE1"], RoutingOptions::NONE, input);
    assert_eq!(state, RoutingState::AlreadyRouted);
    assert_eq!(out, input);
}

#[test]
fn explicit_alias_with_substitute() {
    let (state, out) = route_str(
        "DIGI",
        &["CALLA"],
        &[],
        RoutingOptions::SUBSTITUTE_EXPLICIT_ADDRESS,
        "N0CALL>APRS,CALLA:data",
    );
    assert_eq!(state, RoutingState::Routed);
    assert_eq!(out, "N0CALL>APRS,DIGI*:data");
}

#[test]
fn preempt_front_moves_station_just_after_last_used() {
    let (state, out) = route_str(
        "DIGI",
        &[],
        &[],
        RoutingOptions::PREEMPT_FRONT,
        "N0CALL>APRS,CALLA,CALLB*,CALLC,DIGI,CALLD,CALLE,CALLF:data",
    );
    assert_eq!(state, RoutingState::Routed);
    assert_eq!(out, "N0CALL>APRS,CALLA,CALLB,DIGI*,CALLC,CALLD,CALLE,CALLF:data");
}

#[test]
fn trap_excessive_hops_substitutes_station() {
    let (state, out) = route_str(
        "DIGI",
        &[],
        &["WIDE2-2"],
        RoutingOptions::TRAP_EXCESSIVE_HOPS,
        "N0CALL>APRS,CALLA,WIDE2-7:data",
    );
    assert_eq!(state, RoutingState::Routed);
    assert_eq!(out, "N0CALL>APRS,CALLA,DIGI*:data");
}

#[test]
fn reject_excessive_hops_skips_the_candidate_entirely() {
    let (state, _out) = route_str(
        "DIGI",
        &[],
        &["WIDE2-2"],
        RoutingOptions::REJECT_EXCESSIVE_HOPS,
        "N0CALL>APRS,WIDE2-7:data",
    );
    assert_eq!(state, RoutingState::NoMatchingAddresses);
}

#[test]
fn reject_takes_priority_over_trap_when_both_set() {
    let combined = RoutingOptions::REJECT_EXCESSIVE_HOPS | RoutingOptions::TRAP_EXCESSIVE_HOPS;
    let (state, out) = route_str("DIGI", &[], &["WIDE2-2"], combined, "N0CALL>APRS,WIDE2-7:data");
    // the excessive candidate is filtered before the trap check ever runs on it
    assert_eq!(state, RoutingState::NoMatchingAddresses);
    assert_eq!(out, "N0CALL>APRS,WIDE2-7:data");
}

#[test]
fn unknown_n_n_pattern_does_not_route() {
    let (state, _) = route_str("DIGI", &[], &["WIDE1"], RoutingOptions::NONE, "N0CALL>APRS,TRACE1-1:data");
    assert_eq!(state, RoutingState::NoMatchingAddresses);
}

#[test]
fn full_path_with_decrement_only_keeps_length() {
    // 8 addresses already: when hops remain after decrementing, a full path
    // just decrements in place, with no room to insert or mark the station.
    let input = "N0CALL>APRS,A,B,C,D,E,F,G,WIDE2-2:data";
    let (state, out) = route_str("DIGI", &[], &["WIDE2"], RoutingOptions::NONE, input);
    assert_eq!(state, RoutingState::Routed);
    assert_eq!(out, "N0CALL>APRS,A,B,C,D,E,F,G,WIDE2-1:data");
}

#[test]
fn full_path_with_substitute_complete_hops_keeps_length() {
    let input = "N0CALL>APRS,A,B,C,D,E,F,G,WIDE1-1:data";
    let (state, out) = route_str(
        "DIGI",
        &[],
        &["WIDE1"],
        RoutingOptions::SUBSTITUTE_COMPLETE_HOPS,
        input,
    );
    assert_eq!(state, RoutingState::Routed);
    assert_eq!(out, "N0CALL>APRS,A,B,C,D,E,F,G,DIGI*:data");
}

#[test]
fn full_path_declines_insertion_when_not_substituting() {
    // 8 addresses already, counter lands on 0, no substitution: mark used, do not insert.
    let input = "N0CALL>APRS,A,B,C,D,E,F,G,WIDE1-1:data";
    let (state, out) = route_str("DIGI", &[], &["WIDE1"], RoutingOptions::NONE, input);
    assert_eq!(state, RoutingState::Routed);
    assert_eq!(out, "N0CALL>APRS,A,B,C,D,E,F,G,WIDE1*:data");
}

#[test]
fn strict_mode_rejects_malformed_ssid() {
    let (state, _) = route_str(
        "DIGI",
        &[],
        &["WIDE1"],
        RoutingOptions::STRICT,
        "N0CALL>APRS,CALLA-08,WIDE1-3:data",
    );
    assert_eq!(state, RoutingState::NotRouted);
}

#[test]
fn routing_ended_when_last_used_is_final_address() {
    let input = "N0CALL>APRS,CALLA,CALLB*:data";
    let (state, out) = route_str("DIGI", &[], &["WIDE1"], RoutingOptions::NONE, input);
    assert_eq!(state, RoutingState::NotRouted);
    assert_eq!(out, input);
}

#[test]
fn packet_sent_to_us_is_not_routed() {
    let input = "N0CALL>DIGI,WIDE1-1:data";
    let (state, out) = route_str("DIGI", &[], &["WIDE1"], RoutingOptions::NONE, input);
    assert_eq!(state, RoutingState::NotRouted);
    assert_eq!(out, input);
}

#[test]
fn success_is_true_even_when_not_routed() {
    let packet = Packet::decode("N0CALL>DIGI,WIDE1-1:data").unwrap();
    let settings = RouterSettings::new("DIGI", Vec::<&str>::new(), vec!["WIDE1"], RoutingOptions::NONE, false);
    let result = aprsroute::route(&packet, &settings);
    assert_eq!(result.state, RoutingState::NotRouted);
    assert!(result.success);
}

#[test]
fn cannot_route_self_without_route_self_flag() {
    let input = "DIGI>APRS,CALLA:data";
    let (state, out) = route_str("DIGI", &["CALLA"], &[], RoutingOptions::NONE, input);
    assert_eq!(state, RoutingState::CannotRouteSelf);
    assert_eq!(out, input);
}

#[test]
fn route_self_allows_routing_own_traffic() {
    let input = "DIGI>APRS,CALLA:data";
    let (state, out) = route_str("DIGI", &["CALLA"], &[], RoutingOptions::ROUTE_SELF, input);
    assert_eq!(state, RoutingState::Routed);
    assert_eq!(out, "DIGI>APRS,DIGI*,CALLA:data");
}

#[test]
fn re_routing_an_already_routed_result_does_not_mutate_further() {
    let input = "N0CALL>APRS,CALL,DIGI*,WIDE1-1:data";
    let settings = RouterSettings::new("DIGI", Vec::<&str>::new(), vec!["WIDE1"], RoutingOptions::NONE, false);
    let packet = Packet::decode(input).unwrap();
    let first = aprsroute::route(&packet, &settings);
    let second = aprsroute::route(&first.routed_packet, &settings);
    assert_eq!(first.state, RoutingState::AlreadyRouted);
    assert_eq!(second.state, RoutingState::AlreadyRouted);
    assert_eq!(second.routed_packet, first.routed_packet);
}

#[test]
fn decode_then_encode_is_the_identity_on_a_canonical_string() {
    let original = "N0CALL>APRS,WIDE1-1,WIDE2-2:data";
    let packet = Packet::decode(original).unwrap();
    assert_eq!(packet.encode(), original);
}

#[test]
fn preempt_front_preserves_path_length() {
    let input = "N0CALL>APRS,CALLA,CALLB*,CALLC,DIGI,CALLD:data";
    let packet = Packet::decode(input).unwrap();
    let settings = RouterSettings::new(
        "DIGI",
        Vec::<&str>::new(),
        Vec::<&str>::new(),
        RoutingOptions::PREEMPT_FRONT,
        false,
    );
    let result = aprsroute::route(&packet, &settings);
    assert_eq!(result.state, RoutingState::Routed);
    assert_eq!(result.routed_packet.path.len(), packet.path.len());
    assert_eq!(result.routed_packet.path, vec!["CALLA", "CALLB", "DIGI*", "CALLC", "CALLD"]);
}
