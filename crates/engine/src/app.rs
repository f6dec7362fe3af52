//! Application state and composition.

use std::sync::Arc;

use crate::entities::EntityResolver;
use crate::infrastructure::{
    clock::SystemClock,
    ports::{ClockPort, EntityDirectory},
};
use crate::use_cases::NotificationPrinter;

/// Main application state.
///
/// Wires the host's entity directory and a clock into the printer.
pub struct App {
    pub resolver: Arc<EntityResolver>,
    pub printer: Arc<NotificationPrinter>,
}

impl App {
    /// Create a new App on the system clock.
    pub fn new(directory: Arc<dyn EntityDirectory>) -> Self {
        Self::with_clock(directory, Arc::new(SystemClock::new()))
    }

    /// Create a new App with an explicit clock (tests, replays).
    pub fn with_clock(directory: Arc<dyn EntityDirectory>, clock: Arc<dyn ClockPort>) -> Self {
        let resolver = Arc::new(EntityResolver::new(directory));
        let printer = Arc::new(NotificationPrinter::new(resolver.clone(), clock));

        Self { resolver, printer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockClockPort;
    use crate::test_fixtures::{fixed_now, name_directory, payloads, raw};
    use reconbot_domain::NotificationType;

    #[tokio::test]
    async fn composed_printer_uses_injected_clock() {
        let mut clock = MockClockPort::new();
        clock.expect_now().times(1).returning(fixed_now);

        let app = App::with_clock(name_directory(), Arc::new(clock));
        let line = app
            .printer
            .transform(&raw(
                NotificationType::StructureLostShields,
                payloads::CITADEL_LOST_SHIELDS,
            ))
            .await
            .unwrap();

        assert_eq!(
            line,
            "[2017-03-01 10:00:00] Citadel (Astrahus, \"Jita - Keepstar\") reinforced in Jita \
             (comes out of reinforce on \"2017-03-02 14:42:00\")"
        );
    }

    #[tokio::test]
    async fn resolver_is_shared_with_printer() {
        let app = App::new(name_directory());
        assert_eq!(
            app.resolver
                .resolve_system(reconbot_domain::SolarSystemId::new(30000142))
                .await
                .unwrap(),
            "Jita"
        );
    }
}
