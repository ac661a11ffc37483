use approx::assert_relative_eq;
use time::OffsetDateTime;

use mr2313_core::{
    DecodeError, Iff, Mr2313Converter, RANGE_SCALES, SearadarMessage, SentenceConverter,
    TargetStatus, TargetType, decode_sentence, decode_sentence_at,
};

fn ttm_sentence(number: &str, distance: &str, bearing: &str, speed: &str, course: &str) -> String {
    format!(
        "$RATTM,{number},{distance},{bearing},T,{speed},{course},T,0.4,4.1,N,b,T,,457362,A*00"
    )
}

fn rsd_sentence(scale: &str) -> String {
    format!("$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,{scale},N,N,S*00")
}

fn single(messages: Vec<SearadarMessage>) -> SearadarMessage {
    assert_eq!(messages.len(), 1, "expected exactly one message: {messages:?}");
    messages.into_iter().next().expect("one message")
}

#[test]
fn ttm_example_decodes_to_tracked_target() {
    let message = single(
        decode_sentence("$RATTM,66,28.71,341.1,T,57.6,024.5,T,0.4,4.1,N,b,L,,457362,XA*42")
            .unwrap(),
    );

    let SearadarMessage::TrackedTarget(ttm) = message else {
        panic!("expected tracked target, got {message:?}");
    };
    assert_eq!(ttm.target_number, 66);
    assert_relative_eq!(ttm.distance, 28.71);
    assert_relative_eq!(ttm.bearing, 341.1);
    assert_relative_eq!(ttm.speed, 57.6);
    assert_relative_eq!(ttm.course, 24.5);
    assert_eq!(ttm.iff, Iff::Friend);
    assert_eq!(ttm.status, TargetStatus::Lost);
    assert_eq!(ttm.target_type, TargetType::Unknown);
    assert_eq!(ttm.msg_time, ttm.received_at);
}

#[test]
fn ttm_fields_match_literals() {
    let cases = [
        ("0", "0.0", "0.0", "0.0", "0.0"),
        ("1", "0.05", "359.9", "0.1", "359.9"),
        ("99", "96.00", "180.5", "45.25", "007.0"),
        ("2147483647", "1e1", "12", "3", "4"),
        ("-5", "28.71", "341.1", "57.6", "024.5"),
    ];
    for (number, distance, bearing, speed, course) in cases {
        let sentence = ttm_sentence(number, distance, bearing, speed, course);
        let SearadarMessage::TrackedTarget(ttm) = single(decode_sentence(&sentence).unwrap())
        else {
            panic!("expected tracked target for {sentence}");
        };
        assert_eq!(ttm.target_number, number.parse::<i32>().unwrap());
        assert_relative_eq!(ttm.distance, distance.parse::<f64>().unwrap());
        assert_relative_eq!(ttm.bearing, bearing.parse::<f64>().unwrap());
        assert_relative_eq!(ttm.speed, speed.parse::<f64>().unwrap());
        assert_relative_eq!(ttm.course, course.parse::<f64>().unwrap());
    }
}

#[test]
fn ttm_uses_supplied_receipt_time() {
    let at = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let message = single(decode_sentence_at(&ttm_sentence("1", "1", "1", "1", "1"), at).unwrap());
    assert_eq!(message.received_at(), at);
}

#[test]
fn rsd_example_with_valid_scale() {
    let message = single(
        decode_sentence("$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,96.0,N,N,S*33").unwrap(),
    );

    let SearadarMessage::RadarSystemData(rsd) = message else {
        panic!("expected radar system data, got {message:?}");
    };
    assert_relative_eq!(rsd.initial_distance, 36.5);
    assert_relative_eq!(rsd.initial_bearing, 331.4);
    assert_relative_eq!(rsd.moving_circle_of_distance, 8.4);
    assert_relative_eq!(rsd.bearing, 320.6);
    assert_relative_eq!(rsd.distance_from_ship, 11.6);
    assert_relative_eq!(rsd.bearing2, 185.3);
    assert_eq!(rsd.distance_scale, 96.0);
    assert_eq!(rsd.distance_unit, "N");
    assert_eq!(rsd.display_orientation, "N");
    assert_eq!(rsd.working_mode, "S");
}

#[test]
fn rsd_example_with_invalid_scale() {
    let message = single(
        decode_sentence("$RARSD,14.0,0.0,96.9,306.4,,,,,97.7,11.6,0.3,K,N,S*20").unwrap(),
    );

    let SearadarMessage::Invalid(invalid) = message else {
        panic!("expected invalid report, got {message:?}");
    };
    assert!(invalid.info.contains("RSD"));
    assert!(invalid.info.contains("0.3"));
}

#[test]
fn every_allowed_scale_is_accepted() {
    for scale in RANGE_SCALES {
        let message = single(decode_sentence(&rsd_sentence(&scale.to_string())).unwrap());
        assert!(
            matches!(message, SearadarMessage::RadarSystemData(_)),
            "scale {scale} rejected"
        );
    }
}

#[test]
fn scales_outside_the_set_are_reported() {
    for scale in ["0.3", "0.0", "2.0", "2.5", "100.0", "-96.0", "0.12"] {
        let message = single(decode_sentence(&rsd_sentence(scale)).unwrap());
        let SearadarMessage::Invalid(invalid) = message else {
            panic!("scale {scale} should be invalid");
        };
        assert!(
            invalid.info.ends_with(&format!(": {scale}")),
            "{} does not mention {scale}",
            invalid.info
        );
    }
}

#[test]
fn negative_target_number_is_decoded() {
    let message = single(
        decode_sentence("$RATTM,-5,28.71,341.1,T,57.6,024.5,T,0.4,4.1,N,b,L,,457362,XA*42")
            .unwrap(),
    );
    let SearadarMessage::TrackedTarget(ttm) = message else {
        panic!("expected tracked target, got {message:?}");
    };
    assert_eq!(ttm.target_number, -5);
}

#[test]
fn non_finite_scale_is_a_numeric_error() {
    for scale in ["NaN", "Infinity", "inf"] {
        let err = decode_sentence(&rsd_sentence(scale)).unwrap_err();
        assert!(
            matches!(err, DecodeError::InvalidNumber { tag: "RSD", index: 11, .. }),
            "scale {scale}: {err:?}"
        );
    }
}

#[test]
fn unrecognized_tags_yield_nothing() {
    for sentence in [
        "$RAVHW,115.6,T,,,46.0,N,,*71",
        "$RARSDA,115.6,T,,,46.0,N,,*71",
        "$RAttm,66,28.71,341.1,T,57.6,024.5,T,0.4,4.1,N,b,L*00",
        "$RA*00",
    ] {
        assert!(decode_sentence(sentence).unwrap().is_empty(), "{sentence}");
    }
}

#[test]
fn malformed_frames_fail() {
    let err = decode_sentence("$RATTM,66,28.71,341.1,T,57.6,024.5,T,0.4,4.1,N,b,L").unwrap_err();
    assert_eq!(err, DecodeError::MissingChecksumDelimiter);
    assert!(err.is_malformed_frame());

    let err = decode_sentence("$RATTM,66,28.71,341.1*42").unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TooFewFields {
            tag: "TTM",
            needed: 13,
            actual: 4
        }
    ));

    let err = decode_sentence("").unwrap_err();
    assert!(matches!(err, DecodeError::TooShort { .. }));
}

#[test]
fn non_numeric_fields_fail_without_partial_output() {
    let err = decode_sentence(&ttm_sentence("six", "1", "1", "1", "1")).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidNumber { tag: "TTM", index: 1, .. }));

    let err = decode_sentence(&rsd_sentence("wide")).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidNumber { tag: "RSD", index: 11, .. }));
    assert!(!err.is_malformed_frame());
}

#[test]
fn identity_and_status_codes_map_conservatively() {
    let cases = [
        ("b", "L", Iff::Friend, TargetStatus::Lost),
        ("p", "Q", Iff::Foe, TargetStatus::UnreliableData),
        ("d", "T", Iff::Unknown, TargetStatus::Tracked),
        ("", "", Iff::Unknown, TargetStatus::UnreliableData),
        ("z", "X", Iff::Unknown, TargetStatus::UnreliableData),
    ];
    for (iff_code, status_code, iff, status) in cases {
        let sentence = format!(
            "$RATTM,1,1.0,1.0,T,1.0,1.0,T,0.4,4.1,N,{iff_code},{status_code},,457362,A*00"
        );
        let SearadarMessage::TrackedTarget(ttm) = single(decode_sentence(&sentence).unwrap())
        else {
            panic!("expected tracked target for {sentence}");
        };
        assert_eq!(ttm.iff, iff, "{sentence}");
        assert_eq!(ttm.status, status, "{sentence}");
    }
}

#[test]
fn concurrent_decoding_needs_no_coordination() {
    let handles: Vec<_> = (0..8)
        .map(|n| {
            std::thread::spawn(move || {
                let converter = Mr2313Converter;
                let sentence = ttm_sentence(&n.to_string(), "1.5", "2.5", "3.5", "4.5");
                converter.convert(&sentence)
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let message = single(handle.join().expect("thread").unwrap());
        let SearadarMessage::TrackedTarget(ttm) = message else {
            panic!("expected tracked target");
        };
        assert_eq!(ttm.target_number as usize, n);
    }
}
