use futures_util::future::try_join;

use super::{messages, ActionResult, App};
use crate::api::InventoryApi;
use crate::view::render_dashboard;

impl<A: InventoryApi> App<A> {
    /// Fetch stats and the expiring list (independently, concurrently)
    /// and render the dashboard once both arrive.
    pub async fn load_dashboard(&self) -> ActionResult<()> {
        tracing::debug!("Loading dashboard");

        let fetched = try_join(
            self.api.stats(self.user),
            self.api.expiring_items(self.user, self.settings.expiring_days),
        )
        .await;

        match fetched {
            Ok((stats, expiring)) => {
                let view = render_dashboard(&stats, &expiring);
                self.with_state(|state| state.screen.dashboard = Some(view));
                Ok(())
            }
            Err(e) => Err(self.report(e.into(), messages::LOAD_DASHBOARD_FAILED)),
        }
    }

    /// Reload the dashboard and confirm with a toast
    pub async fn refresh_dashboard(&self) -> ActionResult<()> {
        self.load_dashboard().await?;
        self.with_state(|state| state.notifier.success(messages::DASHBOARD_REFRESHED));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{app, toasts};
    use super::*;
    use crate::api::fake::{food_item, Call};
    use crate::model::{Stats, UrgencyLevel};
    use crate::view::CategoryChart;

    #[tokio::test]
    async fn test_load_dashboard_renders_everything() {
        let app = app();
        *app.api().stats.lock().unwrap() = Stats {
            total_items: 4,
            expiring_today: 1,
            expiring_within_3_days: 2,
            fresh_items: 2,
            category_breakdown: [("蔬菜".to_string(), 3), ("肉类".to_string(), 1)]
                .into_iter()
                .collect(),
        };
        *app.api().expiring.lock().unwrap() = vec![food_item(1, "菠菜", UrgencyLevel::Today, 0)];

        app.load_dashboard().await.unwrap();

        let calls = app.api().calls();
        assert!(calls.contains(&Call::Stats(1)));
        assert!(calls.contains(&Call::Expiring(1, 3)));

        let view = app.state().screen.dashboard.clone().unwrap();
        assert_eq!(view.tiles.total_items, 4);
        assert!(view.urgent.visible);
        assert_eq!(view.urgent.entries[0].days_text, "今天到期！");
        let CategoryChart::Bars(bars) = &view.chart else {
            panic!("expected bars");
        };
        assert_eq!(bars.iter().map(|b| b.percent).sum::<u32>(), 100);
    }

    #[tokio::test]
    async fn test_empty_expiring_hides_urgent_panel() {
        let app = app();
        app.load_dashboard().await.unwrap();

        let view = app.state().screen.dashboard.clone().unwrap();
        assert!(!view.urgent.visible);
        assert_eq!(view.chart, CategoryChart::Empty);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_render() {
        let app = app();
        app.load_dashboard().await.unwrap();
        let before = app.state().screen.dashboard.clone();

        app.api().fail("expiring");
        assert!(app.load_dashboard().await.is_err());

        assert_eq!(app.state().screen.dashboard, before);
        assert_eq!(toasts(&app), vec![messages::LOAD_DASHBOARD_FAILED]);
    }

    #[tokio::test]
    async fn test_refresh_notifies_on_success_only() {
        let app = app();
        app.refresh_dashboard().await.unwrap();
        assert_eq!(toasts(&app), vec![messages::DASHBOARD_REFRESHED]);

        app.state().notifier.drain();
        app.api().fail("stats");
        assert!(app.refresh_dashboard().await.is_err());
        assert_eq!(toasts(&app), vec![messages::LOAD_DASHBOARD_FAILED]);
    }
}
