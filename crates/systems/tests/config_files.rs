#![cfg(feature = "serde-derive")]

use orrery_solvers::{fixed_step, transient};
use orrery_systems::{ConfigError, Gravity, GravityConfig, Lorenz, LorenzConfig};

#[test]
fn gravity_config_from_json() {
    let json = r#"{ "g": 1.0, "masses": [10000.0, 10000.0, 10000.0] }"#;

    let config: GravityConfig = serde_json::from_str(json).expect("valid json");

    assert_eq!(config, GravityConfig::three_body());
    assert_eq!(Gravity::new(config), Ok(Gravity::three_body()));
}

#[test]
fn invalid_masses_are_rejected_after_loading() {
    let json = r#"{ "g": 1.0, "masses": [1.0, -1.0] }"#;

    let config: GravityConfig = serde_json::from_str(json).expect("valid json");

    assert_eq!(Gravity::new(config), Err(ConfigError::Mass { index: 1 }));
}

#[test]
fn lorenz_config_fills_defaults_from_toml() {
    let config: LorenzConfig = toml::from_str("rho = 99.96").expect("valid toml");

    assert_eq!(
        config,
        LorenzConfig {
            rho: 99.96,
            ..LorenzConfig::default()
        }
    );
    assert!(Lorenz::new(config).is_ok());
}

#[test]
fn stepper_config_from_toml() {
    let config: fixed_step::Config = toml::from_str(
        r#"
        method = "euler"
        check_finite = true
        "#,
    )
    .expect("valid toml");

    assert_eq!(
        config,
        fixed_step::Config::new(fixed_step::Method::Euler).with_finite_check()
    );

    let config: fixed_step::Config = toml::from_str("").expect("empty table");
    assert_eq!(config, fixed_step::Config::default());
}

#[test]
fn driver_config_is_validated_when_loaded() {
    let config: transient::Config =
        serde_json::from_str(r#"{ "dt": 0.001, "steps": 10 }"#).expect("valid json");
    assert_eq!(config, transient::Config::new(0.0, 0.001, 10).unwrap());

    let result: Result<transient::Config, _> =
        serde_json::from_str(r#"{ "start": 0.0, "dt": 0.0, "steps": 10 }"#);
    assert!(result.is_err());

    let steps = format!(r#"{{ "dt": 0.001, "steps": {} }}"#, usize::MAX);
    let result: Result<transient::Config, _> = serde_json::from_str(&steps);
    assert!(result.is_err());
}
