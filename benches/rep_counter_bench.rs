// ABOUTME: Criterion benchmarks for the per-frame hot path
// ABOUTME: Measures joint angle estimation and full frame processing through the session controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for per-frame processing.
//!
//! Every captured frame goes through angle estimation and the rep state
//! machine, so both must stay well below a camera frame interval.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use repsense::config::ExerciseCatalog;
use repsense::models::{ExerciseType, Gender, LandmarkFrame, Profile};
use repsense::session::SessionController;
use repsense_intelligence::joint_angle;
use repsense_providers::sources::synthetic::left_arm_pose;
use repsense_providers::{LandmarkSource, SyntheticCurlConfig, SyntheticCurlSource};
use tokio::runtime::Runtime;

fn bench_profile() -> Profile {
    Profile {
        exercise: ExerciseType::BicepCurl,
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        gender: Gender::Male,
        contact: String::new(),
    }
}

fn synthetic_frames(rt: &Runtime, reps: u32) -> Vec<LandmarkFrame> {
    rt.block_on(async {
        let mut source = SyntheticCurlSource::new(SyntheticCurlConfig {
            reps,
            drop_every: 25,
            ..SyntheticCurlConfig::default()
        });
        let mut frames = Vec::new();
        while let Some(frame) = source.next_frame().await.unwrap() {
            frames.push(frame);
        }
        frames
    })
}

fn bench_joint_angle(c: &mut Criterion) {
    let pose = left_arm_pose(95.0);
    let shoulder = pose[&repsense::models::Joint::LeftShoulder];
    let elbow = pose[&repsense::models::Joint::LeftElbow];
    let wrist = pose[&repsense::models::Joint::LeftWrist];

    c.bench_function("joint_angle", |b| {
        b.iter(|| joint_angle(black_box(shoulder), black_box(elbow), black_box(wrist)));
    });
}

fn bench_process_frames(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("process_frames");

    for reps in [10_u32, 100] {
        let frames = synthetic_frames(&rt, reps);
        group.throughput(Throughput::Elements(frames.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(reps), &frames, |b, frames| {
            b.to_async(&rt).iter(|| async {
                let mut controller = SessionController::builder().build();
                let profile = bench_profile();
                let exercise = ExerciseCatalog::standard().get(profile.exercise).unwrap();
                controller.start(profile, exercise).await.unwrap();
                for frame in frames {
                    black_box(controller.process_frame(frame).await);
                }
                controller.stop().await
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_joint_angle, bench_process_frames);
criterion_main!(benches);
