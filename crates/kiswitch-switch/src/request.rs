use indexmap::IndexMap;
use kiswitch_footprint::Footprint;
use kiswitch_keycap::KeycapFamily;
use tracing::{debug, warn};

use crate::{SwitchError, SwitchFamily};

/// One generation request: a switch family with its arguments, optionally
/// crossed with a keycap family over a list of sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub family: SwitchFamily,
    pub switch_args: IndexMap<String, String>,
    pub keycap: Option<KeycapFamily>,
    /// Keycap size names; `None` means the family's default list.
    pub keycap_sizes: Option<Vec<String>>,
    pub keycap_args: IndexMap<String, String>,
}

impl Request {
    pub fn new(family: SwitchFamily) -> Self {
        Self {
            family,
            switch_args: IndexMap::new(),
            keycap: None,
            keycap_sizes: None,
            keycap_args: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn switch_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.switch_args.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn keycap(mut self, family: KeycapFamily) -> Self {
        self.keycap = Some(family);
        self
    }

    #[must_use]
    pub fn keycap_sizes<S: Into<String>>(mut self, sizes: impl IntoIterator<Item = S>) -> Self {
        self.keycap_sizes = Some(sizes.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn keycap_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.keycap_args.insert(key.into(), value.into());
        self
    }

    fn sizes(&self) -> Vec<&str> {
        match &self.keycap_sizes {
            Some(sizes) => sizes.iter().map(String::as_str).collect(),
            None => self.family.default_keys().to_vec(),
        }
    }

    /// The bare switch first, then one footprint per keycap size.
    ///
    /// Every footprint is assembled from scratch out of the same validated
    /// parameters. All keycaps are validated before anything is assembled,
    /// so a bad size fails the whole request.
    pub fn build(&self) -> Result<Vec<Footprint>, SwitchError> {
        let params = self.family.params(&self.switch_args)?;

        let keycaps = match self.keycap {
            Some(keycap) => {
                let sizes = self.sizes();
                if sizes.is_empty() {
                    return Err(SwitchError::Unsupported(format!(
                        "{} has no default keycap sizes, list them explicitly",
                        self.family
                    )));
                }
                sizes
                    .into_iter()
                    .map(|size| keycap.build(Some(size), &self.keycap_args))
                    .collect::<Result<Vec<_>, _>>()?
            }
            None => {
                if self.keycap_sizes.is_some() {
                    warn!(family = %self.family, "keycap sizes given without a keycap family, ignoring");
                }
                Vec::new()
            }
        };

        let mut out = Vec::with_capacity(keycaps.len() + 1);
        out.push(self.family.assemble(&params)?.finish());
        for keycap in keycaps {
            out.push(self.family.assemble(&params)?.with_keycap(keycap).finish());
        }
        debug!(family = %self.family, count = out.len(), "request built");
        Ok(out)
    }
}
