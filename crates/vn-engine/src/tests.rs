//! Engine integration tests: lifecycle, queries, patches, live ticking, and
//! the wire shapes of the boundary types.

#[cfg(test)]
mod support {
    use std::time::{Duration, Instant};

    use vn_core::{GeoPoint, Scenario};

    use crate::api::CreateParams;
    use crate::engine::{Engine, EngineConfig};

    pub fn delhi() -> GeoPoint {
        GeoPoint::new(28.6139, 77.209)
    }

    pub fn params(density: u32) -> CreateParams {
        CreateParams {
            scenario: Scenario::Urban,
            density,
            location: delhi(),
            duration_secs: None,
        }
    }

    /// An engine whose tick loops fire fast enough for test deadlines, with a
    /// fixed seed so population generation is reproducible.
    pub fn fast_engine() -> Engine {
        Engine::with_config(EngineConfig {
            tick_period: Duration::from_millis(20),
            seed:        Some(42),
        })
    }

    /// An engine whose tick period is long enough that no tick fires during
    /// the test — for exercising the pre-first-tick state.
    pub fn slow_engine() -> Engine {
        Engine::with_config(EngineConfig {
            tick_period: Duration::from_secs(3600),
            seed:        Some(42),
        })
    }

    /// Poll `probe` until it returns true or `deadline` elapses.
    pub fn wait_for(deadline: Duration, mut probe: impl FnMut() -> bool) -> bool {
        let end = Instant::now() + deadline;
        while Instant::now() < end {
            if probe() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        probe()
    }
}

#[cfg(test)]
mod record {
    use chrono::Utc;
    use vn_core::{Scenario, SimRng, SimulationId};
    use vn_metrics::MetricsBlock;
    use vn_model::{generate_population, LearningConfig};

    use crate::sim::{SimState, Status};

    use super::support::delhi;

    fn fresh_state(density: u32) -> SimState {
        let mut rng = SimRng::new(1);
        let vehicles = generate_population(density, delhi(), &mut rng);
        SimState {
            id: SimulationId::generate(),
            status: Status::Running,
            scenario: Scenario::Urban,
            density,
            origin: delhi(),
            started_at: Utc::now(),
            ended_at: None,
            duration_limit_secs: None,
            owner: "test".to_owned(),
            vehicles,
            groups: Vec::new(),
            metrics: MetricsBlock::new(density),
            learning: LearningConfig::default(),
            tick_count: 0,
        }
    }

    #[test]
    fn tick_moves_every_vehicle_and_records() {
        let mut state = fresh_state(8);
        let before: Vec<_> = state.vehicles.iter().map(|v| v.position).collect();

        let now = Utc::now();
        let sample = state.apply_tick(now).unwrap();

        for (vehicle, old) in state.vehicles.iter().zip(before) {
            assert_ne!(vehicle.position, old);
            assert_eq!(vehicle.path.len(), 1);
            assert_eq!(vehicle.path.iter().next().unwrap().timestamp, now);
        }
        assert_eq!(sample.vehicle_density, 8.0);
        assert_eq!(state.tick_count, 1);
        assert_eq!(state.metrics.vehicle_density.len(), 1);
        assert_eq!(state.metrics.link_loss.len(), 1);
    }

    #[test]
    fn tick_is_refused_once_stopped() {
        let mut state = fresh_state(5);
        state.apply_tick(Utc::now()).unwrap();

        state.status = Status::Stopped;
        let before: Vec<_> = state.vehicles.iter().map(|v| v.position).collect();

        assert!(state.apply_tick(Utc::now()).is_none());
        assert_eq!(state.tick_count, 1);
        for (vehicle, old) in state.vehicles.iter().zip(before) {
            assert_eq!(vehicle.position, old);
        }
    }

    #[test]
    fn elapsed_freezes_at_end_time() {
        let mut state = fresh_state(5);
        state.started_at = Utc::now() - chrono::Duration::seconds(30);
        state.ended_at = Some(state.started_at + chrono::Duration::seconds(10));

        // `now` far past the end must not matter.
        let far_future = Utc::now() + chrono::Duration::seconds(900);
        assert_eq!(state.elapsed_secs(far_future), 10);
    }
}

#[cfg(test)]
mod lifecycle {
    use vn_core::{GeoPoint, Scenario, SimulationId, VnError};

    use crate::api::MetricsQuery;
    use crate::sim::Status;

    use super::support::{delhi, params, slow_engine};

    #[test]
    fn create_starts_a_running_population() {
        let engine = slow_engine();
        let receipt = engine.create(params(10), "tester").unwrap();

        assert!(receipt.simulation_id.as_str().starts_with("sim_"));
        assert_eq!(receipt.status, Status::Running);

        let status = engine.status(&receipt.simulation_id).unwrap();
        assert_eq!(status.vehicle_count, 10);
        assert_eq!(status.group_count, 0);
        assert_eq!(status.scenario, Scenario::Urban);

        // Every vehicle spawns within the offset box around the origin.
        let page = engine.vehicles(&receipt.simulation_id, 100, 0).unwrap();
        for vehicle in &page.vehicles {
            assert!(vehicle.position.within_bbox(delhi(), 0.005));
        }
    }

    #[test]
    fn create_rejects_density_out_of_bounds() {
        let engine = slow_engine();
        for density in [0, 4, 51, 500] {
            let err = engine.create(params(density), "tester").unwrap_err();
            assert!(matches!(err, VnError::InvalidParameter { field: "density", .. }));
        }
        assert!(engine.list(None).is_empty());
    }

    #[test]
    fn create_rejects_malformed_location() {
        let engine = slow_engine();
        for location in [
            GeoPoint::new(91.0, 0.0),
            GeoPoint::new(-91.0, 0.0),
            GeoPoint::new(0.0, 181.0),
            GeoPoint::new(f64::NAN, 0.0),
            GeoPoint::new(0.0, f64::INFINITY),
        ] {
            let mut p = params(10);
            p.location = location;
            let err = engine.create(p, "tester").unwrap_err();
            assert!(matches!(err, VnError::InvalidParameter { field: "location", .. }));
        }
    }

    #[test]
    fn list_filters_by_owner() {
        let engine = slow_engine();
        let a = engine.create(params(5), "alice").unwrap().simulation_id;
        let b = engine.create(params(5), "bob").unwrap().simulation_id;

        assert_eq!(engine.list(None).len(), 2);
        assert_eq!(engine.list(Some("alice")), vec![a]);
        assert_eq!(engine.list(Some("bob")), vec![b]);
        assert!(engine.list(Some("carol")).is_empty());
    }

    #[test]
    fn stop_is_rejected_the_second_time() {
        let engine = slow_engine();
        let id = engine.create(params(5), "tester").unwrap().simulation_id;

        let summary = engine.stop(&id).unwrap();
        assert_eq!(summary.status, Status::Stopped);

        let err = engine.stop(&id).unwrap_err();
        assert!(matches!(err, VnError::NotRunning(ref stale) if *stale == id));

        // The record stays queryable after stopping.
        assert_eq!(engine.status(&id).unwrap().status, Status::Stopped);
    }

    #[test]
    fn stop_before_first_tick_uses_fallback_averages() {
        let engine = slow_engine();
        let id = engine.create(params(12), "tester").unwrap().simulation_id;

        let summary = engine.stop(&id).unwrap();
        assert_eq!(summary.avg_vehicle_density, 12.0);
        assert_eq!(summary.avg_link_loss, 0.15);
        assert_eq!(summary.groups_formed, 0);
    }

    #[test]
    fn unknown_id_is_reported_on_every_operation() {
        let engine = slow_engine();
        let ghost = SimulationId::new("sim_0000000000");

        assert!(matches!(engine.status(&ghost), Err(VnError::SimulationNotFound(_))));
        assert!(matches!(engine.stop(&ghost), Err(VnError::SimulationNotFound(_))));
        assert!(matches!(engine.vehicles(&ghost, 10, 0), Err(VnError::SimulationNotFound(_))));
        assert!(matches!(
            engine.metrics(&ghost, &MetricsQuery::default()),
            Err(VnError::SimulationNotFound(_))
        ));
        assert!(matches!(engine.remove(&ghost), Err(VnError::SimulationNotFound(_))));
    }

    #[test]
    fn remove_drops_the_record() {
        let engine = slow_engine();
        let id = engine.create(params(5), "tester").unwrap().simulation_id;
        assert_eq!(engine.list(None).len(), 1);

        engine.remove(&id).unwrap();
        assert!(engine.list(None).is_empty());
        assert!(matches!(engine.status(&id), Err(VnError::SimulationNotFound(_))));
    }
}

#[cfg(test)]
mod queries {
    use vn_core::{VehicleId, VnError};

    use crate::api::MetricsQuery;

    use super::support::{params, slow_engine};

    #[test]
    fn vehicle_pages_report_the_total_count() {
        let engine = slow_engine();
        let id = engine.create(params(20), "tester").unwrap().simulation_id;

        let page = engine.vehicles(&id, 7, 0).unwrap();
        assert_eq!(page.count, 20);
        assert_eq!(page.vehicles.len(), 7);

        let tail = engine.vehicles(&id, 7, 14).unwrap();
        assert_eq!(tail.count, 20);
        assert_eq!(tail.vehicles.len(), 6);

        let past_end = engine.vehicles(&id, 7, 100).unwrap();
        assert!(past_end.vehicles.is_empty());
        assert_eq!(past_end.count, 20);
    }

    #[test]
    fn detail_reports_in_range_connections() {
        let engine = slow_engine();
        let id = engine.create(params(15), "tester").unwrap().simulation_id;
        let first = engine.vehicles(&id, 1, 0).unwrap().vehicles[0].id.clone();

        let detail = engine.vehicle_detail(&id, &first).unwrap();
        assert_eq!(detail.summary.id, first);
        assert!(detail.path.is_empty());

        // The spawn box is under a kilometre in each axis, so most peers are
        // in range; far corners of the box can still fall outside it.
        assert!(!detail.connections.is_empty());
        assert!(detail.connections.len() <= 14);
        for conn in &detail.connections {
            assert_ne!(conn.vehicle_id, first);
            assert!(conn.distance_m < 1_000.0);
            assert!(conn.link_quality > 0.0 && conn.link_quality <= 1.0);
        }
    }

    #[test]
    fn detail_rejects_unknown_vehicle() {
        let engine = slow_engine();
        let id = engine.create(params(5), "tester").unwrap().simulation_id;

        let ghost = VehicleId::new("v_zzzzzz");
        let err = engine.vehicle_detail(&id, &ghost).unwrap_err();
        assert!(matches!(err, VnError::VehicleNotFound(_)));
    }

    #[test]
    fn group_list_is_empty_but_well_formed() {
        let engine = slow_engine();
        let id = engine.create(params(5), "tester").unwrap().simulation_id;

        let page = engine.groups(&id).unwrap();
        assert_eq!(page.count, 0);
        assert!(page.groups.is_empty());
    }

    #[test]
    fn metrics_report_echoes_query_and_seeds() {
        let engine = slow_engine();
        let id = engine.create(params(10), "tester").unwrap().simulation_id;

        let report = engine.metrics(&id, &MetricsQuery::default()).unwrap();
        assert_eq!(report.timeframe_secs, 60);
        assert_eq!(report.interval_secs, 1);

        // Before the first tick: display seeds, empty histories, zero averages.
        assert_eq!(report.vehicle_density.current, 10.0);
        assert_eq!(report.link_loss.current, 0.15);
        assert_eq!(report.centrality.current, 0.7);
        assert_eq!(report.group_formation.current, 0.0);
        assert!(report.vehicle_density.history.is_empty());
        assert_eq!(report.vehicle_density.average, 0.0);
    }
}

#[cfg(test)]
mod patches {
    use vn_core::{Scenario, VnError};

    use crate::api::{LearningPatch, PatchParams};

    use super::support::{params, slow_engine};

    #[test]
    fn patch_updates_density_without_regenerating_vehicles() {
        let engine = slow_engine();
        let id = engine.create(params(10), "tester").unwrap().simulation_id;

        let outcome = engine
            .patch(&id, &PatchParams { density: Some(30), scenario: None })
            .unwrap();
        assert_eq!(outcome.updated, vec!["density"]);
        assert_eq!(outcome.current.density, 30);

        // The population is generated once; a density patch never touches it.
        assert_eq!(engine.vehicles(&id, 100, 0).unwrap().count, 10);
    }

    #[test]
    fn patch_can_change_both_fields() {
        let engine = slow_engine();
        let id = engine.create(params(10), "tester").unwrap().simulation_id;

        let outcome = engine
            .patch(
                &id,
                &PatchParams { density: Some(25), scenario: Some(Scenario::Highway) },
            )
            .unwrap();
        assert_eq!(outcome.updated, vec!["density", "scenario"]);
        assert_eq!(outcome.current.scenario, Scenario::Highway);
    }

    #[test]
    fn invalid_patch_leaves_the_record_untouched() {
        let engine = slow_engine();
        let id = engine.create(params(10), "tester").unwrap().simulation_id;

        let err = engine
            .patch(&id, &PatchParams { density: Some(4), scenario: Some(Scenario::Highway) })
            .unwrap_err();
        assert!(matches!(err, VnError::InvalidParameter { field: "density", .. }));

        let status = engine.status(&id).unwrap();
        assert_eq!(status.scenario, Scenario::Urban);
    }

    #[test]
    fn patch_requires_a_running_simulation() {
        let engine = slow_engine();
        let id = engine.create(params(10), "tester").unwrap().simulation_id;
        engine.stop(&id).unwrap();

        let err = engine
            .patch(&id, &PatchParams { density: Some(20), scenario: None })
            .unwrap_err();
        assert!(matches!(err, VnError::NotRunning(_)));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let engine = slow_engine();
        let id = engine.create(params(10), "tester").unwrap().simulation_id;

        let outcome = engine.patch(&id, &PatchParams::default()).unwrap();
        assert!(outcome.updated.is_empty());
        assert_eq!(outcome.current.density, 10);
    }

    #[test]
    fn learning_rates_are_stored_and_bounded() {
        let engine = slow_engine();
        let id = engine.create(params(10), "tester").unwrap().simulation_id;

        let cfg = engine.learning(&id).unwrap();
        assert_eq!(cfg.learning_rate, 0.1);
        assert_eq!(cfg.exploration_rate, 0.2);

        let outcome = engine
            .patch_learning(
                &id,
                &LearningPatch { learning_rate: Some(0.5), exploration_rate: None },
            )
            .unwrap();
        assert_eq!(outcome.updated, vec!["learningRate"]);
        assert_eq!(outcome.current.learning_rate, 0.5);
        // Untouched fields survive.
        assert_eq!(outcome.current.discount_factor, 0.9);

        for bad in [-0.1, 1.1, f64::NAN] {
            let err = engine
                .patch_learning(
                    &id,
                    &LearningPatch { learning_rate: Some(bad), exploration_rate: None },
                )
                .unwrap_err();
            assert!(matches!(err, VnError::InvalidParameter { field: "learningRate", .. }));
        }
        assert_eq!(engine.learning(&id).unwrap().learning_rate, 0.5);
    }

    #[test]
    fn learning_patch_requires_a_running_simulation() {
        let engine = slow_engine();
        let id = engine.create(params(10), "tester").unwrap().simulation_id;
        engine.stop(&id).unwrap();

        let err = engine
            .patch_learning(
                &id,
                &LearningPatch { learning_rate: Some(0.3), exploration_rate: None },
            )
            .unwrap_err();
        assert!(matches!(err, VnError::NotRunning(_)));
    }
}

#[cfg(test)]
mod hub {
    use chrono::Utc;
    use vn_core::SimulationId;
    use vn_metrics::TickSample;

    use crate::api::TickUpdate;
    use crate::hub::{BroadcastHub, SUBSCRIBER_QUEUE_CAP};

    fn update() -> TickUpdate {
        TickUpdate {
            timestamp: Utc::now(),
            metrics:   TickSample {
                vehicle_density: 5.0,
                link_loss:       0.1,
                centrality:      0.7,
                group_count:     0.0,
            },
        }
    }

    #[test]
    fn dropped_subscriber_is_evicted_on_next_publish() {
        let hub = BroadcastHub::new();
        let id = SimulationId::new("sim_hub0000001");
        hub.register(&id);

        let kept = hub.subscribe(&id).unwrap();
        let gone = hub.subscribe(&id).unwrap();
        assert_eq!(hub.subscriber_count(&id), 2);

        drop(gone);
        assert_eq!(hub.publish(&id, &update()), 1);
        assert_eq!(hub.subscriber_count(&id), 1);
        assert!(kept.try_recv().is_ok());
    }

    #[test]
    fn full_queue_is_skipped_but_subscriber_is_kept() {
        let hub = BroadcastHub::new();
        let id = SimulationId::new("sim_hub0000002");
        hub.register(&id);

        let stalled = hub.subscribe(&id).unwrap();
        for _ in 0..SUBSCRIBER_QUEUE_CAP {
            assert_eq!(hub.publish(&id, &update()), 1);
        }

        // The stalled queue is full: publish returns immediately, skipping it
        // for this update while its sibling still receives.
        let live = hub.subscribe(&id).unwrap();
        assert_eq!(hub.publish(&id, &update()), 1);
        assert!(live.try_recv().is_ok());
        assert_eq!(hub.subscriber_count(&id), 2);

        // Draining one slot makes the stalled subscriber deliverable again.
        assert!(stalled.try_recv().is_ok());
        assert_eq!(hub.publish(&id, &update()), 2);
    }

    #[test]
    fn unsubscribe_detaches_immediately() {
        let hub = BroadcastHub::new();
        let id = SimulationId::new("sim_hub0000003");
        hub.register(&id);

        let detached = hub.subscribe(&id).unwrap();
        let remaining = hub.subscribe(&id).unwrap();

        hub.unsubscribe(&id, detached.id);
        assert_eq!(hub.subscriber_count(&id), 1);

        assert_eq!(hub.publish(&id, &update()), 1);
        assert!(remaining.try_recv().is_ok());
        // The detached slot's sender was dropped with it.
        assert!(detached.try_recv().is_err());
    }

    #[test]
    fn close_disconnects_remaining_subscribers() {
        let hub = BroadcastHub::new();
        let id = SimulationId::new("sim_hub0000004");
        hub.register(&id);

        let sub = hub.subscribe(&id).unwrap();
        hub.close(&id);

        assert_eq!(hub.subscriber_count(&id), 0);
        assert!(matches!(
            sub.try_recv(),
            Err(crossbeam_channel::TryRecvError::Disconnected)
        ));
        assert_eq!(hub.publish(&id, &update()), 0);
    }
}

#[cfg(test)]
mod ticking {
    use std::time::Duration;

    use vn_core::{SimulationId, VnError};

    use crate::api::MetricsQuery;

    use super::support::{fast_engine, params, wait_for};

    #[test]
    fn ticks_accumulate_history_and_paths() {
        let engine = fast_engine();
        let id = engine.create(params(6), "tester").unwrap().simulation_id;

        let ticked = wait_for(Duration::from_secs(2), || {
            engine
                .metrics(&id, &MetricsQuery::default())
                .map(|r| r.vehicle_density.history.len() >= 3)
                .unwrap_or(false)
        });
        assert!(ticked, "tick loop never produced three samples");

        let report = engine.metrics(&id, &MetricsQuery::default()).unwrap();
        assert_eq!(report.vehicle_density.current, 6.0);
        assert_eq!(report.vehicle_density.average, 6.0);
        assert!(report.link_loss.current >= 0.0 && report.link_loss.current < 0.2);

        let first = engine.vehicles(&id, 1, 0).unwrap().vehicles[0].id.clone();
        let detail = engine.vehicle_detail(&id, &first).unwrap();
        assert!(detail.path.len() >= 3);
    }

    #[test]
    fn stop_halts_the_tick_loop() {
        let engine = fast_engine();
        let id = engine.create(params(5), "tester").unwrap().simulation_id;

        wait_for(Duration::from_secs(2), || {
            engine
                .metrics(&id, &MetricsQuery::default())
                .map(|r| !r.vehicle_density.history.is_empty())
                .unwrap_or(false)
        });
        engine.stop(&id).unwrap();

        let frozen = engine.metrics(&id, &MetricsQuery::default()).unwrap();
        std::thread::sleep(Duration::from_millis(100));
        let later = engine.metrics(&id, &MetricsQuery::default()).unwrap();
        assert_eq!(
            frozen.vehicle_density.history.len(),
            later.vehicle_density.history.len()
        );
    }

    #[test]
    fn subscribers_receive_tick_updates() {
        let engine = fast_engine();
        let id = engine.create(params(5), "tester").unwrap().simulation_id;

        let sub = engine.subscribe(&id).unwrap();
        let update = sub
            .recv_timeout(Duration::from_secs(2))
            .expect("no tick update arrived");
        assert_eq!(update.metrics.vehicle_density, 5.0);
        assert!(update.metrics.link_loss >= 0.0 && update.metrics.link_loss < 0.2);
        assert_eq!(update.metrics.group_count, 0.0);
    }

    #[test]
    fn subscribe_rejects_unknown_simulation() {
        let engine = fast_engine();
        let ghost = SimulationId::new("sim_0000000000");
        assert!(matches!(engine.subscribe(&ghost), Err(VnError::SimulationNotFound(_))));
    }

    #[test]
    fn simulations_tick_independently() {
        let engine = fast_engine();
        let small = engine.create(params(5), "tester").unwrap().simulation_id;
        let large = engine.create(params(50), "tester").unwrap().simulation_id;

        assert_eq!(engine.vehicles(&small, 100, 0).unwrap().count, 5);
        assert_eq!(engine.vehicles(&large, 100, 0).unwrap().count, 50);

        engine.stop(&small).unwrap();

        // The sibling keeps ticking after the stop.
        let before = engine
            .metrics(&large, &MetricsQuery::default())
            .unwrap()
            .vehicle_density
            .history
            .len();
        let advanced = wait_for(Duration::from_secs(2), || {
            engine
                .metrics(&large, &MetricsQuery::default())
                .map(|r| r.vehicle_density.history.len() > before)
                .unwrap_or(false)
        });
        assert!(advanced);

        let report = engine.metrics(&large, &MetricsQuery::default()).unwrap();
        assert_eq!(report.vehicle_density.current, 50.0);
    }

    #[test]
    fn drop_joins_all_tick_threads() {
        let engine = fast_engine();
        for _ in 0..3 {
            engine.create(params(5), "tester").unwrap();
        }
        // Dropping must stop every loop and join promptly, not hang.
        drop(engine);
    }

    #[test]
    fn metrics_window_is_bounded_by_timeframe() {
        let engine = fast_engine();
        let id = engine.create(params(5), "tester").unwrap().simulation_id;

        wait_for(Duration::from_secs(3), || {
            engine
                .metrics(&id, &MetricsQuery::default())
                .map(|r| r.vehicle_density.history.len() >= 5)
                .unwrap_or(false)
        });

        let query = MetricsQuery { timeframe_secs: 2, interval_secs: 1 };
        let report = engine.metrics(&id, &query).unwrap();
        assert_eq!(report.timeframe_secs, 2);
        assert_eq!(report.vehicle_density.history.len(), 2);
        assert_eq!(report.link_loss.history.len(), 2);
    }
}

#[cfg(test)]
mod wire {
    use std::time::Duration;

    use super::support::{fast_engine, params, slow_engine};

    use crate::api::MetricsQuery;

    #[test]
    fn tick_update_serializes_with_wire_names() {
        let engine = fast_engine();
        let id = engine.create(params(5), "tester").unwrap().simulation_id;

        let sub = engine.subscribe(&id).unwrap();
        let update = sub
            .recv_timeout(Duration::from_secs(2))
            .expect("no tick update arrived");

        let json = serde_json::to_value(update).unwrap();
        let metrics = &json["metrics"];
        assert!(metrics["vehicleDensity"].is_number());
        assert!(metrics["linkLoss"].is_number());
        assert!(metrics["centrality"].is_number());
        assert!(metrics["groupCount"].is_number());
    }

    #[test]
    fn metrics_report_uses_the_historical_group_name() {
        let engine = slow_engine();
        let id = engine.create(params(10), "tester").unwrap().simulation_id;

        let report = engine.metrics(&id, &MetricsQuery::default()).unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert!(json.get("groupFormation").is_some());
        assert!(json.get("timeframeSeconds").is_some());
        assert!(json.get("intervalSeconds").is_some());
        assert!(json.get("groupCount").is_none());
    }

    #[test]
    fn vehicle_detail_flattens_summary_and_renames() {
        let engine = slow_engine();
        let id = engine.create(params(5), "tester").unwrap().simulation_id;
        let first = engine.vehicles(&id, 1, 0).unwrap().vehicles[0].id.clone();

        let detail = engine.vehicle_detail(&id, &first).unwrap();
        let json = serde_json::to_value(detail).unwrap();

        assert!(json["id"].as_str().unwrap().starts_with("v_"));
        assert!(json["position"]["lng"].is_number());
        assert!(json["speed"].is_number());
        assert!(json["direction"].is_number());
        assert!(json["density"].is_number());
        assert!(json["connections"][0]["distance"].is_number());
    }

    #[test]
    fn preset_catalogue_lists_both_locations() {
        let presets = crate::api::preset_locations();
        assert_eq!(presets.len(), 2);

        let json = serde_json::to_value(&presets).unwrap();
        assert_eq!(json[0]["type"], "urban");
        assert_eq!(json[0]["lat"], 28.6139);
        assert_eq!(json[1]["type"], "highway");
        assert_eq!(json[1]["lng"], -119.0059);
    }
}
