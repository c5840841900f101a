//! End-to-end shell scenario driven through the command bus: open, focus,
//! minimize, and reopen across two applications, checking the full window
//! state after every step.

use app_catalog::{AppCatalog, ApplicationId};
use desktop_wm::{
    run_pending, CommandBus, Point, ScriptedSpawnSource, ShellCommand, WindowManager,
    INITIAL_Z_INDEX,
};
use pretty_assertions::assert_eq;

#[test]
fn desktop_session_walkthrough() {
    let catalog = AppCatalog::builtin();
    let mut wm = WindowManager::with_spawn_source(ScriptedSpawnSource::new(vec![
        Point::new(120, 90),
        Point::new(180, 140),
        Point::new(240, 110),
    ]));
    let bus = CommandBus::new();
    let sender = bus.sender();

    // Open Notes from the dock.
    sender.open_app(ApplicationId::trusted("notes"));
    run_pending(&mut wm, &catalog, &bus);

    assert_eq!(wm.windows().len(), 1);
    let w1 = wm.windows()[0].clone();
    assert_eq!(w1.app_id, ApplicationId::trusted("notes"));
    assert_eq!(w1.title, "Notes");
    assert_eq!(w1.position, Point::new(120, 90));
    assert!(w1.active);
    assert_eq!(w1.z_index, INITIAL_Z_INDEX);

    // Open the calculator; Notes loses focus.
    sender.open_app(ApplicationId::trusted("calculator"));
    run_pending(&mut wm, &catalog, &bus);

    assert_eq!(wm.windows().len(), 2);
    let w2 = wm.windows()[1].clone();
    assert_eq!(w2.app_id, ApplicationId::trusted("calculator"));
    assert!(w2.active);
    assert_eq!(w2.z_index, INITIAL_Z_INDEX + 1);
    assert!(!wm.window(&w1.id).unwrap().active);

    // Click back into Notes: it rises above the calculator.
    sender.send(ShellCommand::Focus {
        window_id: w1.id.clone(),
    });
    run_pending(&mut wm, &catalog, &bus);

    assert!(wm.window(&w1.id).unwrap().active);
    assert_eq!(wm.window(&w1.id).unwrap().z_index, INITIAL_Z_INDEX + 2);
    assert!(!wm.window(&w2.id).unwrap().active);
    let stack: Vec<&str> = wm
        .visible_stack()
        .iter()
        .map(|w| w.app_id.as_str())
        .collect();
    assert_eq!(stack, vec!["calculator", "notes"]);

    // Minimize the calculator; Notes is unchanged and nothing is promoted.
    sender.send(ShellCommand::Minimize {
        window_id: w2.id.clone(),
    });
    run_pending(&mut wm, &catalog, &bus);

    let minimized = wm.window(&w2.id).unwrap();
    assert!(minimized.minimized);
    assert!(!minimized.active);
    assert_eq!(wm.active_window_id(), Some(&w1.id));
    let stack: Vec<&str> = wm
        .visible_stack()
        .iter()
        .map(|w| w.app_id.as_str())
        .collect();
    assert_eq!(stack, vec!["notes"]);

    // Reopen the calculator: the minimized window is not matched, so a
    // second calculator window coexists with the first.
    sender.open_app(ApplicationId::trusted("calculator"));
    run_pending(&mut wm, &catalog, &bus);

    assert_eq!(wm.windows().len(), 3);
    let w3 = wm.windows()[2].clone();
    assert_eq!(w3.app_id, ApplicationId::trusted("calculator"));
    assert_ne!(w3.id, w2.id);
    assert!(w3.active);
    assert_eq!(w3.position, Point::new(240, 110));
    assert!(wm.window(&w2.id).unwrap().minimized);
    assert_eq!(wm.running_app_ids().len(), 2);
}
