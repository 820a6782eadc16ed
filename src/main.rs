use floorplan::catalog::Catalog;
use floorplan::config::EditorConfig;
use floorplan::geometry::Point;
use floorplan::input::Button;
use floorplan::library::FurnitureLibrary;
use floorplan::model::{Floor, FloorPlan, Table, TableStatus};
use floorplan::notify::{Level, Notification};
use floorplan::services::http::HttpFloorPlanService;
use floorplan::services::memory::MemoryFloorPlanService;
use floorplan::services::{FloorPlanService, LayoutPersistence};
use floorplan::session;
use floorplan::surface::{Action, EditorSurface, ToolbarCommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match EditorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration; using defaults");
            EditorConfig::default()
        }
    };

    if std::env::var("FLOORPLAN_USE_HTTP").is_ok_and(|v| v == "1") {
        match HttpFloorPlanService::from_config(&config) {
            Ok(service) => run(&service, &config).await,
            Err(e) => error!(error = %e, "could not build HTTP client"),
        }
    } else {
        run(&demo_service(), &config).await;
    }
}

/// Load the editor, script a short editing session, and save it.
async fn run<S>(service: &S, config: &EditorConfig)
where
    S: FloorPlanService + LayoutPersistence,
{
    let outcome = session::load_editor(service, Catalog::builtin(), config.display_prefs()).await;
    outcome.notifications.iter().for_each(report);
    let mut surface = EditorSurface::new(outcome.store);

    apply(&mut surface, ToolbarCommand::AddTable);
    let placed = surface.on_click(Point::new(200.0, 150.0));
    handle(&placed);

    surface.on_pointer_down(Point::new(203.0, 151.0), Button::Primary);
    handle(&surface.on_pointer_move(Point::new(220.0, 160.0)));
    surface.on_pointer_up();

    apply(&mut surface, ToolbarCommand::Rotate);

    let library = FurnitureLibrary::new();
    match library.select(surface.store_mut(), "booth") {
        Ok(()) => handle(&surface.on_click(Point::new(400.0, 100.0))),
        Err(e) => report(&e.into()),
    }

    for action in surface.command(ToolbarCommand::Save) {
        if let Action::SaveRequested(layout) = action {
            report(&session::save_layout(service, &layout).await);
        }
    }

    let scene = surface.scene(800.0, 600.0);
    info!(items = scene.items.len(), grid_lines = scene.grid.len(), "scene ready");
    for item in &scene.items {
        info!(label = %item.label, x = item.rect.x, y = item.rect.y, rotation = item.rotation, "item");
    }
}

fn apply(surface: &mut EditorSurface, command: ToolbarCommand) {
    let actions = surface.command(command);
    handle(&actions);
}

fn handle(actions: &[Action]) {
    for action in actions {
        if let Action::Notify(n) = action {
            report(n);
        }
    }
}

fn report(notification: &Notification) {
    match notification.level {
        Level::Error => warn!(message = %notification.message, "notification"),
        Level::Success | Level::Info => info!(message = %notification.message, "notification"),
    }
}

fn demo_service() -> MemoryFloorPlanService {
    let plan = FloorPlan { id: Uuid::new_v4(), name: "Main Dining".into() };
    let floors = vec![
        Floor { id: Uuid::new_v4(), name: "Ground Floor".into(), floor_plan_id: plan.id, order: 0 },
        Floor { id: Uuid::new_v4(), name: "Terrace".into(), floor_plan_id: plan.id, order: 1 },
    ];
    let tables = (1..=6)
        .map(|n| Table {
            id: Uuid::new_v4(),
            name: format!("T{n}"),
            capacity: if n % 2 == 0 { 4 } else { 2 },
            status: if n == 3 { TableStatus::Reserved } else { TableStatus::Available },
        })
        .collect();
    MemoryFloorPlanService::new()
        .with_floor_plan(plan)
        .with_floors(floors)
        .with_tables(tables)
}
