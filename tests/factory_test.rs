// ABOUTME: Integration tests for the sensor-packet factory
// ABOUTME: Validates code dispatch, unknown-code errors, and reading arity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride::errors::AppError;
use stride::intelligence::{read_packet, read_sensor_packet, Workout};
use stride::models::{SensorPacket, WorkoutKind};

#[test]
fn each_code_dispatches_to_its_kind() {
    let cases: &[(&str, &[f64], WorkoutKind)] = &[
        ("RUN", &[15_000.0, 1.0, 75.0], WorkoutKind::Running),
        ("WLK", &[9_000.0, 1.0, 75.0, 180.0], WorkoutKind::SportsWalking),
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], WorkoutKind::Swimming),
    ];

    for (code, readings, kind) in cases {
        let workout = read_packet(code, readings).unwrap();
        assert_eq!(workout.kind(), *kind);
    }
}

#[test]
fn unknown_code_is_rejected() {
    let err = read_packet("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
    match err {
        AppError::UnknownWorkoutCode { code } => assert_eq!(code, "XYZ"),
        other => panic!("expected UnknownWorkoutCode, got {other:?}"),
    }
}

// Deliberate deviation from the tracker firmware, which trusts reading
// arity and crashes on mismatched packets: the factory validates arity and
// reports it as a typed error instead.
#[test]
fn wrong_arity_is_an_error_not_a_panic() {
    let err = read_packet("RUN", &[15_000.0, 1.0]).unwrap_err();
    match err {
        AppError::MalformedReadings {
            kind,
            expected,
            got,
        } => {
            assert_eq!(kind, WorkoutKind::Running);
            assert_eq!(expected, 3);
            assert_eq!(got, 2);
        }
        other => panic!("expected MalformedReadings, got {other:?}"),
    }

    let err = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 7.0]).unwrap_err();
    assert!(matches!(
        err,
        AppError::MalformedReadings {
            kind: WorkoutKind::Swimming,
            expected: 5,
            got: 6,
        }
    ));
}

#[test]
fn owned_packets_decode_like_borrowed_ones() {
    let packet = SensorPacket::new("WLK", vec![9_000.0, 1.0, 75.0, 180.0]);
    let workout = read_sensor_packet(&packet).unwrap();
    assert_eq!(workout.kind(), WorkoutKind::SportsWalking);
}
