use integration_tests::{TurbulenceCases, load_toml};
use wxcalc_core::Component;
use wxcalc_models::turbulence::{
    Category, EnvironmentSize, EnvironmentType, Season, TimeOfDay, TurbulenceEngine,
    TurbulenceError, TurbulenceRequest,
};

#[test]
fn fixture_scenarios() {
    let TurbulenceCases { cases } = load_toml("turbulence.toml");
    assert!(!cases.is_empty());

    for case in cases {
        let result = TurbulenceEngine
            .call(case.request)
            .unwrap_or_else(|err| panic!("{}: {err}", case.name));
        assert_eq!(result.score, case.score, "{}", case.name);
        assert_eq!(result.category, case.category, "{}", case.name);
    }
}

fn request(temperature: &str, wind_speed: &str) -> TurbulenceRequest {
    TurbulenceRequest {
        temperature: temperature.into(),
        wind_speed: wind_speed.into(),
        ..TurbulenceRequest::default()
    }
}

#[test]
fn score_never_exceeds_ten() {
    for temperature in ["-60", "-20", "15", "45", "60"] {
        for wind_speed in ["0", "25", "80", "200"] {
            let mut input = request(temperature, wind_speed);
            input.environment_size = EnvironmentSize::Large;
            input.season = Season::Winter;
            input.time_of_day = TimeOfDay::Day;

            let result = TurbulenceEngine.call(input).unwrap();
            assert!(result.score <= 10);
            assert_eq!(result.category, Category::from_score(result.score));
        }
    }
}

#[test]
fn score_is_monotonic_in_wind_speed() {
    let mut previous = 0;
    for wind in 0..=40 {
        let result = TurbulenceEngine.call(request("15", &wind.to_string())).unwrap();
        assert!(result.score >= previous, "wind {wind}");
        previous = result.score;
    }
}

#[test]
fn environment_type_never_changes_the_result() {
    for (temperature, wind_speed) in [("0", "0"), ("15", "12"), ("31", "27")] {
        let mut lake = request(temperature, wind_speed);
        lake.environment_type = EnvironmentType::Lake;
        let mut city = lake.clone();
        city.environment_type = EnvironmentType::City;

        assert_eq!(
            TurbulenceEngine.call(lake).unwrap(),
            TurbulenceEngine.call(city).unwrap()
        );
    }
}

#[test]
fn unparseable_fields_are_rejected() {
    for (temperature, wind_speed) in [("", "10"), ("20", ""), ("hot", "10"), ("20", "-3")] {
        assert_eq!(
            TurbulenceEngine.call(request(temperature, wind_speed)),
            Err(TurbulenceError::InvalidInput),
            "temperature={temperature:?} wind_speed={wind_speed:?}"
        );
    }
}
