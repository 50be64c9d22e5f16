// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! End-to-end navigation scenarios driven through the public API.

use aos_core::testing::{lifecycle_only, Journal, RecordingApp, RecordingSurface, ScriptedInput};
use aos_core::{AppManager, EventBus, EventType, Shell, ShellCommand};
use std::rc::Rc;

fn home_a_b(journal: &Journal) -> (Rc<EventBus>, AppManager) {
    let bus = Rc::new(EventBus::new());
    let mut manager = AppManager::new(Rc::clone(&bus));
    for name in ["Home", "A", "B"] {
        manager.register(Box::new(RecordingApp::new(name, journal)));
    }
    (bus, manager)
}

fn take(journal: &Journal) -> Vec<String> {
    let entries = lifecycle_only(journal);
    journal.borrow_mut().clear();
    entries
}

#[test]
fn home_a_b_walkthrough() {
    let journal: Journal = Rc::default();
    let (_bus, mut manager) = home_a_b(&journal);

    manager.launch_by_index(1).unwrap();
    assert_eq!(take(&journal), vec!["A.on_start", "A.on_resume"]);
    assert_eq!(manager.active_name().as_deref(), Some("A"));

    manager.launch_by_index(2).unwrap();
    assert_eq!(
        take(&journal),
        vec!["A.on_pause", "A.on_stop", "B.on_start", "B.on_resume"]
    );
    assert_eq!(manager.active_name().as_deref(), Some("B"));

    manager.return_to_home().unwrap();
    assert_eq!(
        take(&journal),
        vec!["B.on_pause", "B.on_stop", "Home.on_start", "Home.on_resume"]
    );
    assert_eq!(manager.active_name().as_deref(), Some("Home"));

    manager.return_to_home().unwrap();
    assert!(take(&journal).is_empty());
}

#[test]
fn at_most_one_app_is_resumed_at_a_time() {
    let journal: Journal = Rc::default();
    let (_bus, mut manager) = home_a_b(&journal);

    let steps: [&dyn Fn(&mut AppManager); 7] = [
        &|m: &mut AppManager| m.launch_by_index(2).unwrap(),
        &|m: &mut AppManager| m.launch_by_name("A").unwrap(),
        &|m: &mut AppManager| m.launch_by_name("A").unwrap(),
        &|m: &mut AppManager| m.return_to_home().unwrap(),
        &|m: &mut AppManager| assert!(m.launch_by_name("missing").is_err()),
        &|m: &mut AppManager| m.launch_by_index(1).unwrap(),
        &|m: &mut AppManager| m.return_to_home().unwrap(),
    ];

    for step in steps {
        step(&mut manager);
        let mut resumed: Vec<String> = Vec::new();
        for entry in lifecycle_only(&journal) {
            let (name, callback) = entry.split_once('.').unwrap();
            match callback {
                "on_resume" => resumed.push(name.to_string()),
                "on_stop" => resumed.retain(|n| n != name),
                _ => {}
            }
        }
        assert_eq!(resumed.len(), 1, "after {:?}", lifecycle_only(&journal));
        assert_eq!(resumed[0], manager.active_name().unwrap());
    }
    assert_eq!(manager.active_index(), Some(manager.home_index()));
}

#[test]
fn keyboard_driven_session() {
    let journal: Journal = Rc::default();
    let bus = Rc::new(EventBus::new());
    let mut manager = AppManager::new(Rc::clone(&bus));
    let handle = manager.handle();
    manager.register(Box::new(RecordingApp::new("Home", &journal).navigating(
        EventType::KeySelect,
        handle.clone(),
        ShellCommand::LaunchIndex(1),
    )));
    manager.register(Box::new(RecordingApp::new("A", &journal).navigating(
        EventType::KeyBack,
        handle,
        ShellCommand::ReturnHome,
    )));
    manager.launch_by_index(0).unwrap();

    let input = ScriptedInput::new(vec![
        vec![],
        vec![EventType::KeySelect],
        vec![EventType::KeyDown],
        vec![EventType::KeyBack],
    ]);
    let mut shell = Shell::new(bus, manager, input, RecordingSurface::default());
    shell.run();

    assert_eq!(shell.frame_count(), 4);
    assert_eq!(shell.display().frames_presented(), 4);
    assert_eq!(
        lifecycle_only(&journal),
        vec![
            "Home.on_start",
            "Home.on_resume",
            "Home.on_pause",
            "Home.on_stop",
            "A.on_start",
            "A.on_resume",
            "A.on_pause",
            "A.on_stop",
            "Home.on_start",
            "Home.on_resume",
            "Home.on_pause",
            "Home.on_stop",
        ]
    );
    assert!(journal
        .borrow()
        .iter()
        .any(|entry| entry == "A.on_event:KeyDown"));
}
