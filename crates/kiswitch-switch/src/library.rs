//! Library batches: named groups of requests, each written to its own
//! `<group>.pretty` directory by the caller.

use std::fmt;

use indexmap::IndexMap;
use kiswitch_footprint::Footprint;
use kiswitch_keycap::KeycapFamily;
use kiswitch_params::Choice;
use serde::Deserialize;
use tracing::{info, warn};

use crate::families::{choc::ChocType, stabilizer};
use crate::{Request, SwitchError, SwitchFamily};

/// A manifest argument value. YAML scalars keep their type until they are
/// handed to the property system as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

fn to_text(args: &IndexMap<String, Scalar>) -> IndexMap<String, String> {
    args.iter().map(|(k, v)| (k.clone(), v.to_string())).collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub switch: String,
    #[serde(default)]
    pub args: IndexMap<String, Scalar>,
    #[serde(default)]
    pub keycap: Option<String>,
    #[serde(default)]
    pub sizes: Option<Vec<String>>,
    #[serde(default)]
    pub keycap_args: IndexMap<String, Scalar>,
}

impl Job {
    pub fn new(family: SwitchFamily) -> Self {
        Self {
            switch: family.name().to_string(),
            args: IndexMap::new(),
            keycap: None,
            sizes: None,
            keycap_args: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, key: &str, value: impl Into<Scalar>) -> Self {
        self.args.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn keycap(mut self, family: KeycapFamily) -> Self {
        self.keycap = Some(family.name().to_string());
        self
    }

    /// `Family key=value ...`, for log lines.
    pub fn label(&self) -> String {
        let mut label = self.switch.clone();
        for (k, v) in &self.args {
            label.push_str(&format!(" {k}={v}"));
        }
        if let Some(keycap) = &self.keycap {
            label.push_str(&format!(" +{keycap}"));
        }
        label
    }

    pub fn request(&self) -> Result<Request, SwitchError> {
        let family: SwitchFamily = self.switch.parse()?;
        let keycap = self
            .keycap
            .as_deref()
            .map(str::parse::<KeycapFamily>)
            .transpose()?;
        Ok(Request {
            family,
            switch_args: to_text(&self.args),
            keycap,
            keycap_sizes: self.sizes.clone(),
            keycap_args: to_text(&self.keycap_args),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    pub name: String,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub groups: Vec<GroupSpec>,
}

/// Footprints generated for one group, plus the jobs that failed.
#[derive(Debug)]
pub struct GroupOutput {
    pub name: String,
    pub footprints: Vec<Footprint>,
    pub failures: Vec<(String, SwitchError)>,
}

impl GroupOutput {
    pub fn dir_name(&self) -> String {
        format!("{}.pretty", self.name)
    }
}

impl Manifest {
    pub fn from_yaml(text: &str) -> Result<Self, SwitchError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// The complete keyswitch library.
    pub fn builtin() -> Self {
        use KeycapFamily::{Keycap, KeycapChoc};
        use SwitchFamily::*;

        let group = |name: &str, jobs: Vec<Job>| GroupSpec {
            name: name.to_string(),
            jobs,
        };
        let choc_types = || ChocType::CHOICES.iter().map(|(name, _)| *name);

        let stabilizers = stabilizer::SIZES
            .into_iter()
            .map(|size| Job::new(StabilizerCherryMx).arg("size", size))
            .collect();

        let cherry = ["PCB", "Plate"]
            .into_iter()
            .map(|t| Job::new(CherryMx).arg("switch_type", t).keycap(Keycap))
            .collect();

        let mut kailh = vec![
            Job::new(KailhChocMini).keycap(KeycapChoc),
            Job::new(KailhKh).keycap(Keycap),
            Job::new(KailhNb).keycap(Keycap),
        ];
        kailh.extend(choc_types().map(|t| Job::new(KailhChoc).arg("switch_type", t).keycap(KeycapChoc)));

        let mut hotswap = Vec::new();
        for plated in [false, true] {
            hotswap.push(
                Job::new(HotswapKailh)
                    .arg("hotswap_plated", plated)
                    .keycap(Keycap),
            );
            hotswap.extend(choc_types().map(|t| {
                Job::new(KailhChoc)
                    .arg("switch_type", t)
                    .arg("hotswap", true)
                    .arg("hotswap_plated", plated)
                    .keycap(KeycapChoc)
            }));
        }

        Manifest {
            groups: vec![
                group("Mounting_Keyboard_Stabilizer", stabilizers),
                group(
                    "Switch_Keyboard_Alps_Matias",
                    vec![Job::new(AlpsMatias).keycap(Keycap)],
                ),
                group("Switch_Keyboard_Cherry_MX", cherry),
                group(
                    "Switch_Keyboard_Hybrid",
                    vec![Job::new(HybridCherryMxAlps).keycap(Keycap)],
                ),
                group("Switch_Keyboard_Kailh", kailh),
                group("Switch_Keyboard_Hotswap_Kailh", hotswap),
            ],
        }
    }

    /// Build every job. A failing job is logged and recorded; the rest of
    /// the batch still runs.
    pub fn generate(&self) -> Vec<GroupOutput> {
        self.groups
            .iter()
            .map(|group| {
                let mut out = GroupOutput {
                    name: group.name.clone(),
                    footprints: Vec::new(),
                    failures: Vec::new(),
                };
                for job in &group.jobs {
                    match job.request().and_then(|r| r.build()) {
                        Ok(fps) => out.footprints.extend(fps),
                        Err(e) => {
                            warn!(group = %group.name, job = %job.label(), error = %e, "job failed");
                            out.failures.push((job.label(), e));
                        }
                    }
                }
                info!(group = %group.name, footprints = out.footprints.len(), "group generated");
                out
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_render_as_property_text() {
        assert_eq!(Scalar::from(6.25).to_string(), "6.25");
        assert_eq!(Scalar::from(2.0).to_string(), "2");
        assert_eq!(Scalar::from(true).to_string(), "true");
    }

    #[test]
    fn builtin_groups() {
        let names: Vec<_> = Manifest::builtin()
            .groups
            .iter()
            .map(|g| g.name.clone())
            .collect();
        assert_eq!(
            names,
            [
                "Mounting_Keyboard_Stabilizer",
                "Switch_Keyboard_Alps_Matias",
                "Switch_Keyboard_Cherry_MX",
                "Switch_Keyboard_Hybrid",
                "Switch_Keyboard_Kailh",
                "Switch_Keyboard_Hotswap_Kailh",
            ]
        );
    }

    #[test]
    fn job_label() {
        let job = Job::new(SwitchFamily::KailhChoc)
            .arg("switch_type", "V2")
            .arg("hotswap", true)
            .keycap(KeycapFamily::KeycapChoc);
        assert_eq!(job.label(), "SwitchKailhChoc switch_type=V2 hotswap=true +KeycapChoc");
    }
}
