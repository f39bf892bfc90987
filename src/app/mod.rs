pub mod scenario_runner;
