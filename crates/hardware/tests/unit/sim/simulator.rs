//! Simulator Tests.

use std::io::Write;

use pipesim_core::common::{LoadError, SimError};
use pipesim_core::config::{Config, ConfigError};
use pipesim_core::core::pipeline::stages::Redirect;
use pipesim_core::soc::RegisterFile;
use pipesim_core::Simulator;
use tempfile::NamedTempFile;

#[test]
fn from_source_and_run() {
    let mut sim = Simulator::from_source(&Config::default(), "LDI R1 5\nLDI R2 6\nADD R1 R2").unwrap();
    let summary = sim.run().unwrap();
    assert_eq!(sim.cpu.regs.read_gpr(1), 11);
    assert_eq!(summary.cycles, 5);
    assert_eq!(summary.stats.cycles, summary.cycles);
}

#[test]
fn from_file_and_run() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "LDI R9 33").unwrap();

    let mut sim = Simulator::from_file(&Config::default(), file.path()).unwrap();
    let _ = sim.run().unwrap();
    assert_eq!(sim.cpu.regs.read_gpr(9), 33);
}

#[test]
fn assembly_failure_runs_no_cycles() {
    let err = Simulator::from_source(&Config::default(), "LDI R1 5\nNOPE").unwrap_err();
    assert!(matches!(err, SimError::Assemble(_)));
}

#[test]
fn program_larger_than_configured_memory() {
    let mut config = Config::default();
    config.memory.instruction_words = 1;
    let err = Simulator::from_source(&config, "LDI R1 1\nLDI R1 2").unwrap_err();
    assert!(matches!(
        err,
        SimError::Load(LoadError::ProgramTooLarge { len: 2, capacity: 1 })
    ));
}

#[test]
fn tick_advances_one_cycle() {
    let mut sim = Simulator::from_source(&Config::default(), "LDI R1 5").unwrap();

    let first = sim.tick().unwrap();
    assert_eq!(first.cycle, 1);
    assert_eq!(first.fetched, Some(0));
    assert_eq!(first.executed, None);

    let second = sim.tick().unwrap();
    assert_eq!(second.cycle, 2);
    assert_eq!(second.fetched, None);
    assert_eq!(second.decoded, Some(0));
    assert_eq!(sim.cpu.stats.cycles, 2);
    assert_eq!(sim.cpu.regs.read_gpr(1), 0);

    let third = sim.tick().unwrap();
    assert_eq!(third.cycle, 3);
    assert_eq!(third.executed, Some(0));
    assert_eq!(third.redirect, None);
    assert_eq!(sim.cpu.regs.read_gpr(1), 5);
}

#[test]
fn tick_reports_jump_redirect() {
    let mut sim = Simulator::from_source(&Config::default(), "LDI R1 0\nLDI R2 3\nJR R1 R2").unwrap();
    let reports: Vec<_> = (0..5).map(|_| sim.tick().unwrap()).collect();
    assert_eq!(reports[4].executed, Some(2));
    assert_eq!(reports[4].redirect, Some(Redirect::Jump { target: 3 }));
    assert!(reports[..4].iter().all(|r| r.redirect.is_none()));
}

#[test]
fn invalid_config_is_rejected_before_load() {
    let mut config = Config::default();
    config.memory.data_bytes = 0;
    let err = Simulator::from_source(&config, "LDI R1 1").unwrap_err();
    assert!(matches!(
        err,
        SimError::Config(ConfigError::Invalid {
            field: "memory.data_bytes",
            value: 0,
            ..
        })
    ));
}

#[test]
fn oversized_instruction_memory_is_an_error_not_a_panic() {
    let mut config = Config::default();
    config.memory.instruction_words = usize::MAX;
    let err = Simulator::from_source(&config, "LDI R1 1").unwrap_err();
    assert!(matches!(err, SimError::Config(ConfigError::Invalid { .. })));
}

#[test]
fn trace_pipeline_flag_reaches_cpu() {
    let config = Config::from_json_str(r#"{"general": {"trace_pipeline": true}}"#).unwrap();
    let sim = Simulator::new(&config);
    assert!(sim.cpu.trace_pipeline);
}
