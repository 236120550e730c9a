//! Registration of the calendar policies
//!
//! Each supported type can be opted into on its own with a `with_*` call, or
//! all of them at once through [`Destructure::with_calendar_types`] and
//! [`LoggerConfiguration::configure_for_calendar`].

use std::sync::Arc;

use super::policy::{
    DateTimeZonePolicy, DurationPolicy, InstantPolicy, LocalDatePolicy, LocalDateTimePolicy,
    LocalTimePolicy, OffsetDatePolicy, OffsetDateTimePolicy, OffsetTimePolicy, PeriodPolicy,
    YearMonthPolicy, ZonedDateTimePolicy,
};
use super::{Destructure, IntervalPolicy};
use crate::calendar::{ValueKind, ZoneProvider};
use crate::core::configuration::LoggerConfiguration;
use crate::core::error::{LoggerError, Result};

/// A provider without any zone cannot resolve the ids that zoned values carry.
fn check_provider(provider: &dyn ZoneProvider) -> Result<()> {
    if provider.ids().is_empty() {
        return Err(LoggerError::invalid_argument(
            "provider",
            "zone provider exposes no time zones",
        ));
    }
    Ok(())
}

impl Destructure {
    /// Instants as `uuuu-MM-ddTHH:mm:ss;FFFFFFFFFZ`
    #[must_use = "builder methods return a new value"]
    pub fn with_instant(self) -> Self {
        self.with_policy(InstantPolicy::new())
    }

    /// Offsets as opaque scalars, e.g. `+01:02`
    #[must_use = "builder methods return a new value"]
    pub fn with_offset(self) -> Self {
        self.as_scalar(ValueKind::Offset)
    }

    /// Calendar systems as opaque scalars holding their id
    #[must_use = "builder methods return a new value"]
    pub fn with_calendar_system(self) -> Self {
        self.as_scalar(ValueKind::CalendarSystem)
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_local_date_time(self) -> Self {
        self.with_policy(LocalDateTimePolicy::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_local_date(self) -> Self {
        self.with_policy(LocalDatePolicy::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_local_time(self) -> Self {
        self.with_policy(LocalTimePolicy::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_offset_date(self) -> Self {
        self.with_policy(OffsetDatePolicy::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_offset_date_time(self) -> Self {
        self.with_policy(OffsetDateTimePolicy::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_offset_time(self) -> Self {
        self.with_policy(OffsetTimePolicy::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_date_time_zone(self) -> Self {
        self.with_policy(DateTimeZonePolicy::new())
    }

    /// Fails with `InvalidArgument` when the provider has no zones
    pub fn with_zoned_date_time(self, provider: Arc<dyn ZoneProvider>) -> Result<Self> {
        check_provider(provider.as_ref())?;
        Ok(self.with_policy(ZonedDateTimePolicy::new(provider)))
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_duration(self) -> Self {
        self.with_policy(DurationPolicy::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_period(self) -> Self {
        self.with_policy(PeriodPolicy::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_interval(self) -> Self {
        self.with_policy(IntervalPolicy::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_year_month(self) -> Self {
        self.with_policy(YearMonthPolicy::new())
    }

    /// A copy of this registry with every calendar type registered
    ///
    /// Fails with `InvalidArgument` when the provider has no zones; `self`
    /// is left as it was.
    pub fn with_calendar_types(&self, provider: Arc<dyn ZoneProvider>) -> Result<Self> {
        let registry = self
            .clone()
            .with_instant()
            .with_offset()
            .with_calendar_system()
            .with_local_date_time()
            .with_local_date()
            .with_local_time()
            .with_offset_date()
            .with_offset_date_time()
            .with_offset_time()
            .with_date_time_zone()
            .with_zoned_date_time(provider)?;

        Ok(registry
            .with_duration()
            .with_period()
            .with_interval()
            .with_year_month())
    }
}

impl LoggerConfiguration {
    /// Register destructuring for every calendar type
    ///
    /// Policies only apply to values logged with `destructure`; other values
    /// are written as their display text.
    pub fn configure_for_calendar(self, provider: Arc<dyn ZoneProvider>) -> Result<Self> {
        let destructure = self.destructure_config().with_calendar_types(provider)?;
        Ok(self.destructure(|_| destructure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::FixedZoneProvider;

    fn provider() -> Arc<dyn ZoneProvider> {
        Arc::new(FixedZoneProvider::new())
    }

    #[test]
    fn test_registration_order() {
        let registry = Destructure::new().with_calendar_types(provider()).unwrap();

        assert_eq!(
            registry.policy_kinds(),
            vec![
                ValueKind::Instant,
                ValueKind::LocalDateTime,
                ValueKind::LocalDate,
                ValueKind::LocalTime,
                ValueKind::OffsetDate,
                ValueKind::OffsetDateTime,
                ValueKind::OffsetTime,
                ValueKind::DateTimeZone,
                ValueKind::ZonedDateTime,
                ValueKind::Duration,
                ValueKind::Period,
                ValueKind::Interval,
                ValueKind::YearMonth,
            ]
        );
        assert_eq!(
            registry.scalar_kinds(),
            &[ValueKind::Offset, ValueKind::CalendarSystem]
        );
    }

    #[test]
    fn test_every_kind_is_covered_once() {
        let registry = Destructure::new().with_calendar_types(provider()).unwrap();

        for kind in ValueKind::ALL {
            let claims = registry.policy_kinds().iter().filter(|k| *k == kind).count()
                + usize::from(registry.is_scalar(*kind));
            assert_eq!(claims, 1, "{} should be covered exactly once", kind);
        }
    }

    #[test]
    fn test_empty_provider_registers_nothing() {
        let registry = Destructure::new();
        let err = registry
            .with_calendar_types(Arc::new(FixedZoneProvider::empty()))
            .unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_zoned_registration_checks_provider() {
        let err = Destructure::new()
            .with_instant()
            .with_zoned_date_time(Arc::new(FixedZoneProvider::empty()))
            .unwrap_err();
        assert!(err.is_invalid_argument());

        let registry = Destructure::new().with_zoned_date_time(provider()).unwrap();
        assert_eq!(registry.policy_kinds(), vec![ValueKind::ZonedDateTime]);
    }

    #[test]
    fn test_registering_twice_keeps_one_policy_per_kind() {
        let once = Destructure::new().with_calendar_types(provider()).unwrap();
        let twice = once.with_calendar_types(provider()).unwrap();

        assert_eq!(once.policy_kinds(), twice.policy_kinds());
        assert_eq!(once.scalar_kinds(), twice.scalar_kinds());
    }

    #[test]
    fn test_subset_registration() {
        let registry = Destructure::new().with_instant().with_interval();
        assert_eq!(registry.policy_kinds(), vec![ValueKind::Instant, ValueKind::Interval]);
        assert!(!registry.is_scalar(ValueKind::Offset));
    }

    #[test]
    fn test_configure_for_calendar() {
        let config = LoggerConfiguration::new()
            .configure_for_calendar(provider())
            .unwrap();
        assert_eq!(config.destructure_config().policy_count(), 13);

        let err = LoggerConfiguration::new()
            .configure_for_calendar(Arc::new(FixedZoneProvider::empty()))
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
