#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use loadstep::output::args::OutputArgs;
use loadstep::profile::steps::Nonce;
use loadstep::profile::{DEFAULT_LABEL_OFFSET, LoadProfile, ProfileValues};
use tempfile::TempDir;

pub const SAMPLE_PLAN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<jmeterTestPlan version="1.2" properties="5.0" jmeter="5.6.3">
  <hashTree>
    <kg.apc.jmeter.threads.ConcurrencyThreadGroup guiclass="com.blazemeter.jmeter.threads.concurrency.ConcurrencyThreadGroupGui" testclass="com.blazemeter.jmeter.threads.concurrency.ConcurrencyThreadGroup" testname="Users" enabled="true">
      <stringProp name="TargetLevel">${__tstFeedback(shaper,1,1000,10)}</stringProp>
      <stringProp name="RampUp"></stringProp>
      <stringProp name="Steps"></stringProp>
      <stringProp name="Hold">300</stringProp>
      <stringProp name="Unit">S</stringProp>
    </kg.apc.jmeter.threads.ConcurrencyThreadGroup>
    <hashTree>
      <kg.apc.jmeter.timers.VariableThroughputTimer guiclass="kg.apc.jmeter.timers.VariableThroughputTimerGui" testclass="kg.apc.jmeter.timers.VariableThroughputTimer" testname="shaper" enabled="true">
        <collectionProp name="load_profile">
            <collectionProp name="1672531200000000000">
		<stringProp name="1">1</stringProp>
		<stringProp name="5">5</stringProp>
		<stringProp name="30">30</stringProp>
	    </collectionProp>
          </collectionProp>
      	</kg.apc.jmeter.timers.VariableThroughputTimer>
      <hashTree/>
    </hashTree>
  </hashTree>
</jmeterTestPlan>
"#;

pub struct Counter(pub u128);

impl Nonce for Counter {
    fn next_nonce(&mut self) -> u128 {
        self.0 += 1;
        self.0
    }
}

pub fn write_plan(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write plan file");
    path
}

pub fn profile(path: &Path, values: [u64; 5]) -> LoadProfile {
    let [initial_load, increment, ramp_up, hold, steps] = values;
    LoadProfile::new(
        path,
        ProfileValues {
            initial_load,
            increment,
            ramp_up,
            hold,
            steps,
        },
        DEFAULT_LABEL_OFFSET,
    )
    .expect("valid profile")
}

pub fn quiet_output() -> OutputArgs {
    OutputArgs {
        dry_run: false,
        stats: false,
        quiet: true,
    }
}

/// Levels carried by the records inside the load profile, in order.
pub fn rendered_levels(plan: &str) -> Vec<(u64, u64)> {
    let mut levels = Vec::new();
    let mut values = plan
        .lines()
        .skip_while(|l| !l.contains(r#"<collectionProp name="load_profile">"#))
        .take_while(|l| !l.contains("</kg"))
        .filter_map(|l| {
            let start = l.find('>')? + 1;
            let end = l.find("</stringProp>")?;
            l[start..end].parse::<u64>().ok()
        })
        .collect::<Vec<_>>()
        .into_iter();

    while let (Some(from), Some(to), Some(_seconds)) = (values.next(), values.next(), values.next())
    {
        levels.push((from, to));
    }
    levels
}

pub fn hold_values(plan: &str) -> Vec<String> {
    plan.match_indices(r#"<stringProp name="Hold">"#)
        .map(|(idx, tag)| {
            let rest = &plan[idx + tag.len()..];
            rest[..rest.find('<').unwrap()].to_string()
        })
        .collect()
}
