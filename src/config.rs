//! TOML-backed simulation configuration
//!
//! Runs are described by a TOML file with three sections mirroring the three
//! pipeline stages:
//!
//! ```toml
//! [distribution]
//! radius = 5.0        # particle radius (um)
//! nparts = 1000000    # target particle count
//! nbins = 50
//! fmin = 0.0
//! fmax = 1.0
//!
//! [flow]
//! target_velocity = 1.5   # friction velocity (m/s)
//! spinup_time = 0.0       # optional, defaults to 0
//! fluid_density = 1.204   # kg/m3
//! kin_visco = 1.5e-5      # m2/s
//! surf_energy = 0.15      # J/m2
//!
//! [simulation]
//! duration = 100.0    # s
//! dt = 1.0            # s
//! ```
//!
//! The core never reads files itself; configuration loading is a convenience
//! for binaries and demos. Validation happens at load time so parameter
//! errors surface before any computation starts.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::distribution::{Distribution, DistributionBuilder};
use crate::physics::FlowProfile;

// =================================================================================================
// Error Type
// =================================================================================================

/// Errors raised while loading or validating a configuration file
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not valid TOML or misses required fields
    Parse(toml::de::Error),
    /// The parameters are outside their physical domain
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Cannot read configuration file: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid configuration file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// =================================================================================================
// Configuration Sections
// =================================================================================================

/// `[distribution]` section
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionSection {
    /// Particle radius (um)
    pub radius: f64,
    /// Target particle count
    pub nparts: u64,
    /// Number of adhesion bins
    pub nbins: usize,
    /// Lower bound of the normalized adhesion domain
    pub fmin: f64,
    /// Upper bound of the normalized adhesion domain
    pub fmax: f64,
}

/// `[flow]` section
#[derive(Debug, Clone, Deserialize)]
pub struct FlowSection {
    /// Target friction velocity (m/s)
    pub target_velocity: f64,
    /// Spin-up ramp duration (s); omitted means no ramp
    #[serde(default)]
    pub spinup_time: f64,
    /// Fluid density (kg/m3)
    pub fluid_density: f64,
    /// Kinematic viscosity (m2/s)
    pub kin_visco: f64,
    /// Surface energy (J/m2)
    pub surf_energy: f64,
}

/// `[simulation]` section
#[derive(Debug, Clone, Deserialize)]
pub struct RunSection {
    /// Simulated duration (s)
    pub duration: f64,
    /// Time step (s)
    pub dt: f64,
}

/// Complete run configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub distribution: DistributionSection,
    pub flow: FlowSection,
    pub simulation: RunSection,
}

impl SimulationConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check every parameter against its physical domain
    ///
    /// The same checks run again inside the builders; validating here lets a
    /// binary reject a bad file before any work is done.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.distribution;
        if d.radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "distribution.radius must be positive, got {}",
                d.radius
            )));
        }
        if d.nparts == 0 {
            return Err(ConfigError::Invalid("distribution.nparts must be > 0".to_string()));
        }
        if d.nbins == 0 {
            return Err(ConfigError::Invalid("distribution.nbins must be > 0".to_string()));
        }
        if d.fmin >= d.fmax {
            return Err(ConfigError::Invalid(format!(
                "distribution domain is empty: fmin = {}, fmax = {}",
                d.fmin, d.fmax
            )));
        }

        let f = &self.flow;
        if f.target_velocity < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "flow.target_velocity cannot be negative, got {}",
                f.target_velocity
            )));
        }
        if f.spinup_time < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "flow.spinup_time cannot be negative, got {}",
                f.spinup_time
            )));
        }
        for (name, value) in [
            ("flow.fluid_density", f.fluid_density),
            ("flow.kin_visco", f.kin_visco),
            ("flow.surf_energy", f.surf_energy),
            ("simulation.duration", self.simulation.duration),
            ("simulation.dt", self.simulation.dt),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Build the distribution described by the `[distribution]` section
    pub fn build_distribution(&self) -> Result<Distribution, String> {
        let d = &self.distribution;
        DistributionBuilder::new(d.radius, d.nparts, d.nbins, d.fmin, d.fmax)?.generate()
    }

    /// Build the flow profile described by the `[flow]` and `[simulation]` sections
    pub fn build_flow(&self) -> Result<FlowProfile, String> {
        FlowProfile::new(
            self.simulation.duration,
            self.simulation.dt,
            self.flow.spinup_time,
            self.flow.target_velocity,
            self.flow.fluid_density,
            self.flow.kin_visco,
            self.flow.surf_energy,
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        [distribution]
        radius = 5.0
        nparts = 1000000
        nbins = 50
        fmin = 0.0
        fmax = 1.0

        [flow]
        target_velocity = 1.5
        fluid_density = 1.204
        kin_visco = 1.5e-5
        surf_energy = 0.15

        [simulation]
        duration = 100.0
        dt = 1.0
    "#;

    #[test]
    fn test_parse_valid_config() {
        let config = SimulationConfig::from_toml(VALID).unwrap();
        assert_eq!(config.distribution.nbins, 50);
        assert_eq!(config.flow.target_velocity, 1.5);
        // Omitted spinup_time defaults to 0
        assert_eq!(config.flow.spinup_time, 0.0);
        assert_eq!(config.simulation.dt, 1.0);
    }

    #[test]
    fn test_builders_from_config() {
        let config = SimulationConfig::from_toml(VALID).unwrap();
        let distribution = config.build_distribution().unwrap();
        let flow = config.build_flow().unwrap();

        assert_eq!(distribution.nbins(), 50);
        assert_eq!(flow.nsteps(), 100);
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let result = SimulationConfig::from_toml("[distribution]\nradius = 5.0");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_domain_violations_rejected() {
        let bad = VALID.replace("dt = 1.0", "dt = 0.0");
        let result = SimulationConfig::from_toml(&bad);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let bad = VALID.replace("fmax = 1.0", "fmax = -1.0");
        assert!(matches!(SimulationConfig::from_toml(&bad), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SimulationConfig::from_path("/nonexistent/config.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::Invalid("distribution.nbins must be > 0".to_string());
        assert!(err.to_string().contains("nbins"));
    }
}
