//! End-to-end scenario tests for the scheduling environment.
//!
//! Each scenario drives a small, fully specified episode through the
//! public API and checks the exact shaped reward.

use orsim_core::{SurgicalCase, Urgency};
use orsim_env::{encode, Action, EnvConfig, GeneratorConfig, ResetOptions, SchedulingEnv};

fn case(duration: u32, arrival_time: u32, urgency: Urgency) -> SurgicalCase {
    SurgicalCase {
        duration,
        arrival_time,
        urgency,
    }
}

fn single_room_env(cases: Vec<SurgicalCase>) -> SchedulingEnv {
    SchedulingEnv::new(EnvConfig {
        num_rooms: 1,
        max_patients_in_obs: 1,
        cases,
        ..EnvConfig::default()
    })
    .unwrap()
}

fn wait_action(env: &SchedulingEnv) -> u32 {
    encode(
        Action::Wait,
        env.config().num_rooms,
        env.config().max_patients_in_obs,
    )
}

#[test]
fn immediate_assignment_earns_base_bonus() {
    let mut env = single_room_env(vec![case(30, 0, Urgency::Routine)]);
    env.reset(ResetOptions::default());

    // Action 0 decodes to (room 0, slot 0).
    let result = env.step(0);
    assert_eq!(result.reward, 60.0);
    assert_eq!(result.observation.rooms, vec![30]);
    assert!(!result.terminated);
    assert!(!result.truncated);
}

#[test]
fn waiting_with_queue_costs_one_point() {
    let mut env = single_room_env(vec![case(30, 0, Urgency::Routine)]);
    env.reset(ResetOptions::default());

    let result = env.step(wait_action(&env));
    assert_eq!(result.reward, -1.0);
    assert_eq!(result.observation.num_waiting, 1);
}

#[test]
fn empty_day_terminates_immediately_at_zero_reward() {
    let mut env = SchedulingEnv::new(EnvConfig {
        num_rooms: 3,
        day_length: 5,
        max_patients_in_obs: 2,
        ..EnvConfig::default()
    })
    .unwrap();
    env.reset(ResetOptions::default());

    let result = env.step(wait_action(&env));
    assert_eq!(result.reward, 0.0);
    assert!(result.terminated, "nothing waiting, nothing future, all idle");
}

#[test]
fn critical_case_after_long_wait() {
    let mut env = single_room_env(vec![case(30, 0, Urgency::Critical)]);
    env.reset(ResetOptions::default());

    let wait = wait_action(&env);
    for minute in 1..=19u32 {
        let result = env.step(wait);
        // Idle penalty plus ambient pressure once the case has waited
        // two minutes.
        let pressure = if minute >= 2 { 0.05 * f64::from(minute) } else { 0.0 };
        assert!(
            (result.reward - (-1.0 - pressure)).abs() < 1e-9,
            "minute {minute}: reward {}",
            result.reward
        );
    }

    // Assignment at minute 20: +60 base, -0.1*20 waiting, +40 critical,
    // -0.3*(20-15) escalation.
    let result = env.step(0);
    assert!((result.reward - 96.5).abs() < 1e-9);
}

#[test]
fn overtime_is_charged_per_minute() {
    let mut env = SchedulingEnv::new(EnvConfig {
        num_rooms: 1,
        day_length: 100,
        max_patients_in_obs: 1,
        cases: vec![case(90, 0, Urgency::Routine)],
        ..EnvConfig::default()
    })
    .unwrap();
    env.reset(ResetOptions::default());

    let wait = wait_action(&env);
    for _ in 0..19 {
        env.step(wait);
    }
    // Assigned at minute 20, finishing at 110 on a 100-minute day:
    // +60 base, -0.1*20 waiting, -2*10 overtime.
    let result = env.step(0);
    assert!((result.reward - 38.0).abs() < 1e-9);
}

#[test]
fn unassigned_cases_penalized_at_day_end() {
    let mut env = SchedulingEnv::new(EnvConfig {
        num_rooms: 1,
        day_length: 3,
        max_patients_in_obs: 2,
        cases: vec![case(2, 0, Urgency::Routine), case(2, 0, Urgency::Critical)],
        ..EnvConfig::default()
    })
    .unwrap();
    env.reset(ResetOptions::default());

    let wait = wait_action(&env);
    env.step(wait);
    env.step(wait);
    let last = env.step(wait);
    assert!(last.terminated, "day length reached");
    // Final minute: idle -1, critical pressure -0.05*3, terminal
    // penalties -20 routine and -30 critical.
    assert!((last.reward - (-1.0 - 0.15 - 50.0)).abs() < 1e-9);
}

#[test]
fn two_rooms_host_two_cases() {
    let mut env = SchedulingEnv::new(EnvConfig {
        num_rooms: 2,
        max_patients_in_obs: 2,
        cases: vec![case(40, 0, Urgency::Routine), case(50, 0, Urgency::Routine)],
        ..EnvConfig::default()
    })
    .unwrap();
    env.reset(ResetOptions::default());

    // (room 0, slot 0) then (room 1, slot 0).
    let first = env.step(0);
    assert_eq!(first.reward, 60.0);
    let second = env.step(2);
    assert!((second.reward - (60.0 - 0.2)).abs() < 1e-9, "one extra wait minute");
    assert_eq!(second.observation.rooms, vec![39, 50]);
}

#[test]
fn completed_cases_are_tracked() {
    let mut env = single_room_env(vec![case(5, 0, Urgency::Routine)]);
    env.reset(ResetOptions::default());

    env.step(0);
    let wait = wait_action(&env);
    let mut last = env.step(wait);
    while !last.terminated {
        last = env.step(wait);
    }
    let state = env.state();
    assert_eq!(state.completed.len(), 1);
    assert!(state.running.is_empty());
    assert_eq!(state.completed[0].start_time, 1);
    assert_eq!(state.completed[0].finish_time(), 6);
}

#[test]
fn truncation_cap_reports_truncated_without_terminal_penalty() {
    let mut env = SchedulingEnv::new(EnvConfig {
        num_rooms: 1,
        max_patients_in_obs: 1,
        max_episode_steps: Some(3),
        cases: vec![case(30, 0, Urgency::Routine)],
        ..EnvConfig::default()
    })
    .unwrap();
    env.reset(ResetOptions::default());

    let wait = wait_action(&env);
    let first = env.step(wait);
    assert!(!first.truncated);
    let second = env.step(wait);
    assert!(!second.truncated);
    let third = env.step(wait);
    assert!(third.truncated);
    assert!(!third.terminated);
    // Only the idle penalty: the unassigned-case penalty is terminal-only.
    assert_eq!(third.reward, -1.0);
}

#[test]
fn reset_with_same_seed_reproduces_generated_episode() {
    let mut env = SchedulingEnv::new(EnvConfig {
        generator: Some(GeneratorConfig::default()),
        ..EnvConfig::default()
    })
    .unwrap();

    let options = ResetOptions {
        seed: Some(11),
        regenerate: true,
    };
    let (first_obs, _) = env.reset(options);
    let first_future = env.state().future.clone();
    let (second_obs, _) = env.reset(options);
    assert_eq!(first_obs, second_obs);
    assert_eq!(env.state().future, first_future);
}

#[test]
fn reset_without_regeneration_is_idempotent() {
    let cases = vec![case(30, 5, Urgency::Elevated), case(45, 12, Urgency::Critical)];
    let mut env = SchedulingEnv::new(EnvConfig {
        cases,
        ..EnvConfig::default()
    })
    .unwrap();

    let options = ResetOptions {
        seed: Some(3),
        regenerate: false,
    };
    let (first_obs, _) = env.reset(options);
    let (second_obs, _) = env.reset(options);
    assert_eq!(first_obs, second_obs);

    // Identical subsequent episodes, not just initial observations.
    let replay: Vec<u32> = (0..10).map(|i| if i % 2 == 0 { 0 } else { 8 }).collect();
    env.reset(options);
    let first_run: Vec<f64> = replay.iter().map(|&a| env.step(a).reward).collect();
    env.reset(options);
    let second_run: Vec<f64> = replay.iter().map(|&a| env.step(a).reward).collect();
    assert_eq!(first_run, second_run);
}

#[test]
fn regenerate_without_generator_reuses_supplied_list() {
    let cases = vec![case(30, 5, Urgency::Routine)];
    let mut env = SchedulingEnv::new(EnvConfig {
        cases: cases.clone(),
        ..EnvConfig::default()
    })
    .unwrap();

    env.reset(ResetOptions {
        seed: Some(1),
        regenerate: true,
    });
    assert_eq!(env.state().future, cases);
}
