//! Comfort Service
//!
//! Turns a raw weather observation into a full comfort report. The service
//! picks the derived index for the observation's temperature regime (wind
//! chill when cold, heat index when hot, none in between) and feeds it to
//! the temperature classifier alongside the wind and dewpoint classifiers.

use domain::{
    DerivedIndex, DewpointComfortLevel, HEAT_INDEX_MIN_TEMPERATURE_F, RelativeHumidity,
    Temperature, TemperatureComfortLevel, WIND_CHILL_MAX_TEMPERATURE_F, WindComfortLevel,
    WindSpeed, dewpoint_comfort, heat_index, temperature_comfort, wind_chill, wind_comfort,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A single, already-parsed weather observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Air temperature
    pub temperature: Temperature,
    /// Sustained wind speed
    pub wind_speed: WindSpeed,
    /// Relative humidity
    pub relative_humidity: RelativeHumidity,
    /// Dewpoint temperature
    pub dewpoint: Temperature,
}

impl Observation {
    /// Create a new observation
    #[must_use]
    pub const fn new(
        temperature: Temperature,
        wind_speed: WindSpeed,
        relative_humidity: RelativeHumidity,
        dewpoint: Temperature,
    ) -> Self {
        Self {
            temperature,
            wind_speed,
            relative_humidity,
            dewpoint,
        }
    }
}

/// Comfort classification of one observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComfortReport {
    /// Thermal comfort
    pub temperature: TemperatureComfortLevel,
    /// Wind comfort
    pub wind: WindComfortLevel,
    /// Humidity comfort, from the dewpoint
    pub dewpoint: DewpointComfortLevel,
    /// Derived index the thermal comfort was based on
    pub derived_index: DerivedIndex,
}

impl ComfortReport {
    /// Check if any of the levels is an out-of-bounds sentinel
    #[must_use]
    pub const fn has_out_of_bounds(&self) -> bool {
        self.temperature.is_out_of_bounds()
            || self.wind.is_out_of_bounds()
            || self.dewpoint.is_out_of_bounds()
    }
}

/// Service classifying observations into comfort reports
///
/// Stateless; one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComfortService;

impl ComfortService {
    /// Create a new comfort service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Select the derived index appropriate for the observation
    ///
    /// Wind chill applies below 50 °F, heat index above 72 °F. Readings the
    /// formulas are undefined for (a non-finite temperature, or a negative or
    /// NaN wind speed in the cold regime) get no index, which leaves the
    /// temperature unclassified.
    #[must_use]
    pub fn derived_index(&self, observation: &Observation) -> DerivedIndex {
        let t = observation.temperature.fahrenheit();
        if !t.is_finite() {
            return DerivedIndex::None;
        }

        if t < WIND_CHILL_MAX_TEMPERATURE_F {
            let mph = observation.wind_speed.mph();
            if !(mph.is_finite() && mph >= 0.0) {
                return DerivedIndex::None;
            }
            DerivedIndex::WindChill(wind_chill(observation.temperature, observation.wind_speed))
        } else if t > HEAT_INDEX_MIN_TEMPERATURE_F {
            DerivedIndex::HeatIndex(heat_index(
                observation.relative_humidity,
                observation.temperature,
            ))
        } else {
            DerivedIndex::None
        }
    }

    /// Classify an observation
    ///
    /// Never fails. Levels that could not be classified are reported as
    /// their sentinel variants and logged at `warn` level.
    #[instrument(skip(self), level = "debug")]
    pub fn assess(&self, observation: &Observation) -> ComfortReport {
        let derived_index = self.derived_index(observation);

        let report = ComfortReport {
            temperature: temperature_comfort(observation.temperature, derived_index),
            wind: wind_comfort(observation.wind_speed),
            dewpoint: dewpoint_comfort(observation.dewpoint),
            derived_index,
        };

        debug!(
            temperature = %report.temperature,
            wind = %report.wind,
            dewpoint = %report.dewpoint,
            derived_index = %report.derived_index,
            "Observation classified"
        );

        if report.has_out_of_bounds() {
            warn!(
                temperature_f = observation.temperature.fahrenheit(),
                wind_mph = observation.wind_speed.mph(),
                dewpoint_f = observation.dewpoint.fahrenheit(),
                "Observation outside the modelled comfort domain"
            );
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_warnings() -> (LogBuffer, impl tracing::Subscriber + Send + Sync) {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        (logs, subscriber)
    }

    fn observation(temp_f: f64, wind_mph: f64, rh: f64, dewpoint_f: f64) -> Observation {
        Observation::new(
            Temperature::from_fahrenheit(temp_f),
            WindSpeed::from_mph(wind_mph),
            RelativeHumidity::from_fraction(rh).unwrap(),
            Temperature::from_fahrenheit(dewpoint_f),
        )
    }

    #[test]
    fn test_cold_observation_uses_wind_chill() {
        let service = ComfortService::new();
        let obs = observation(0.0, 15.0, 0.6, -5.0);
        assert_eq!(service.derived_index(&obs), DerivedIndex::WindChill(-19));

        let report = service.assess(&obs);
        assert_eq!(report.temperature, TemperatureComfortLevel::ModeratelyDangerousCold);
        assert_eq!(report.wind, WindComfortLevel::ModerateBreeze);
        assert_eq!(report.dewpoint, DewpointComfortLevel::OutOfBounds);
        assert!(report.has_out_of_bounds());
    }

    #[test]
    fn test_hot_observation_uses_heat_index() {
        let service = ComfortService::new();
        let obs = observation(90.0, 5.0, 0.5, 69.0);
        assert_eq!(service.derived_index(&obs), DerivedIndex::HeatIndex(86));

        let report = service.assess(&obs);
        assert_eq!(report.temperature, TemperatureComfortLevel::CautionHot);
        assert_eq!(report.wind, WindComfortLevel::LightBreeze);
        assert_eq!(report.dewpoint, DewpointComfortLevel::ModeratelyHumid);
        assert!(!report.has_out_of_bounds());
    }

    #[test]
    fn test_neutral_observation_has_no_index() {
        let service = ComfortService::new();
        let obs = observation(55.0, 0.0, 0.4, 40.0);
        assert_eq!(service.derived_index(&obs), DerivedIndex::None);

        let report = service.assess(&obs);
        assert_eq!(report.temperature, TemperatureComfortLevel::Cool);
        assert_eq!(report.wind, WindComfortLevel::Calm);
        assert_eq!(report.dewpoint, DewpointComfortLevel::ComfortableDry);
    }

    #[test]
    fn test_regime_boundaries_select_no_index() {
        let service = ComfortService::new();
        assert_eq!(
            service.derived_index(&observation(50.0, 10.0, 0.5, 40.0)),
            DerivedIndex::None
        );
        assert_eq!(
            service.derived_index(&observation(72.0, 10.0, 0.5, 40.0)),
            DerivedIndex::None
        );
    }

    #[test]
    fn test_mild_cold_with_light_wind_falls_through_to_sentinel() {
        // 49 °F with 1 mph wind: wind chill 51 is above every cold band
        let report = ComfortService::new().assess(&observation(49.0, 1.0, 0.5, 35.0));
        assert_eq!(report.derived_index, DerivedIndex::WindChill(51));
        assert_eq!(
            report.temperature,
            TemperatureComfortLevel::TemperatureOutsideReasonableBounds
        );
    }

    #[test]
    fn test_negative_wind_is_not_classified() {
        let report = ComfortService::new().assess(&observation(10.0, -5.0, 0.5, 5.0));
        assert_eq!(report.derived_index, DerivedIndex::None);
        assert_eq!(
            report.temperature,
            TemperatureComfortLevel::TemperatureOutsideReasonableBounds
        );
        assert_eq!(report.wind, WindComfortLevel::OutOfBounds);
    }

    #[test]
    fn test_nan_wind_is_not_classified() {
        let report = ComfortService::new().assess(&observation(40.0, f64::NAN, 0.5, 30.0));
        assert_eq!(report.derived_index, DerivedIndex::None);
        assert_eq!(
            report.temperature,
            TemperatureComfortLevel::TemperatureOutsideReasonableBounds
        );
    }

    #[test]
    fn test_non_finite_temperature_is_not_classified() {
        let service = ComfortService::new();
        for temp_f in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let report = service.assess(&observation(temp_f, 10.0, 0.5, 40.0));
            assert_eq!(report.derived_index, DerivedIndex::None, "{temp_f}");
            assert_eq!(
                report.temperature,
                TemperatureComfortLevel::TemperatureOutsideReasonableBounds,
                "{temp_f}"
            );
        }
    }

    #[test]
    fn test_sentinel_is_logged_as_warning() {
        let (logs, subscriber) = capture_warnings();

        tracing::subscriber::with_default(subscriber, || {
            ComfortService::new().assess(&observation(49.0, 1.0, 0.5, 35.0));
        });

        let logs = logs.contents();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("Observation outside the modelled comfort domain"));
        assert!(logs.contains("temperature_f=49"));
    }

    #[test]
    fn test_classified_observation_logs_no_warning() {
        let (logs, subscriber) = capture_warnings();

        tracing::subscriber::with_default(subscriber, || {
            ComfortService::new().assess(&observation(90.0, 5.0, 0.5, 69.0));
        });

        assert!(logs.contents().is_empty());
    }

    #[test]
    fn test_freezing_observation() {
        let report = ComfortService::new().assess(&observation(20.0, 5.0, 0.7, 15.0));
        assert_eq!(report.derived_index, DerivedIndex::WindChill(12));
        assert_eq!(report.temperature, TemperatureComfortLevel::SafeUnderFreezing);
        assert_eq!(report.dewpoint, DewpointComfortLevel::TooDry);
    }

    #[test]
    fn test_assess_is_idempotent() {
        let service = ComfortService::new();
        let obs = observation(101.0, 30.0, 0.35, 71.0);
        assert_eq!(service.assess(&obs), service.assess(&obs));
    }

    #[test]
    fn test_report_serialization() {
        let report = ComfortService::new().assess(&observation(55.0, 0.0, 0.4, 40.0));
        let json = serde_json::to_value(report).expect("serialize");
        assert_eq!(json["temperature"], "cool");
        assert_eq!(json["wind"], "calm");
        assert_eq!(json["dewpoint"], "comfortable_dry");
        assert_eq!(json["derived_index"]["kind"], "none");
    }
}
