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


//! Owns the registered applications and keeps exactly one in the foreground.

use crate::app::{App, AppHandle, AppInfo, ShellCommand};
use crate::error::LaunchError;
use crate::event::{Event, EventBus, EventType};
use crate::platform::DrawSurface;
use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

/// Registry, active slot and command inbox, shared with the bus subscriptions.
struct Registry {
    apps: Vec<Box<dyn App>>,
    /// Index of the foreground application. Only `switch_to` and `shutdown`
    /// write it.
    active: Option<usize>,
    home_index: usize,
    commands: flume::Receiver<ShellCommand>,
    bus: Rc<EventBus>,
}

impl Registry {
    fn launch_index(&mut self, index: usize) -> Result<(), LaunchError> {
        if index >= self.apps.len() {
            let err = LaunchError::InvalidIndex {
                index,
                installed: self.apps.len(),
            };
            log::error!("{err}");
            return Err(err);
        }
        self.switch_to(index);
        Ok(())
    }

    fn launch_by_name(&mut self, name: &str) -> Result<(), LaunchError> {
        match self.apps.iter().position(|app| app.name() == name) {
            Some(index) => self.launch_index(index),
            None => {
                let err = LaunchError::NotFound {
                    name: name.to_string(),
                };
                log::error!("{err}");
                Err(err)
            }
        }
    }

    fn return_to_home(&mut self) -> Result<(), LaunchError> {
        if self.apps.is_empty() {
            let err = LaunchError::NoApplications;
            log::error!("Cannot return home: {err}");
            return Err(err);
        }
        self.launch_index(self.home_index)
    }

    /// Tears down the foreground application and brings up `target`.
    fn switch_to(&mut self, target: usize) {
        if self.active == Some(target) {
            return;
        }

        if let Some(current) = self.active {
            self.teardown(current);
        }

        self.active = Some(target);
        let app = &mut self.apps[target];
        log::info!("Launching app: {}", app.name());
        app.on_start();
        self.bus
            .publish(Event::new(EventType::AppStarted).with_payload(app.name()));
        app.on_resume();
        self.bus
            .publish(Event::new(EventType::AppResumed).with_payload(app.name()));
    }

    fn teardown(&mut self, index: usize) {
        let app = &mut self.apps[index];
        log::debug!("Stopping app: {}", app.name());
        app.on_pause();
        self.bus
            .publish(Event::new(EventType::AppPaused).with_payload(app.name()));
        app.on_stop();
        self.bus
            .publish(Event::new(EventType::AppStopped).with_payload(app.name()));
    }

    fn shutdown(&mut self) {
        if let Some(current) = self.active {
            self.teardown(current);
            self.active = None;
        }
    }

    fn active_app(&mut self) -> Option<&mut Box<dyn App>> {
        let index = self.active?;
        self.apps.get_mut(index)
    }

    fn forward(&mut self, event: &Event) {
        if let Some(app) = self.active_app() {
            app.on_event(event);
        }
        self.apply_pending();
    }

    /// Applies navigation requests queued by applications, in order.
    fn apply_pending(&mut self) {
        let pending: Vec<ShellCommand> = self.commands.try_iter().collect();
        for command in pending {
            log::debug!("Applying shell command: {command:?}");
            // Failures were already logged by the launch itself.
            let _ = match command {
                ShellCommand::LaunchIndex(index) => self.launch_index(index),
                ShellCommand::LaunchName(name) => self.launch_by_name(&name),
                ShellCommand::ReturnHome => self.return_to_home(),
            };
        }
    }
}

/// The application manager.
///
/// Enforces the single-foreground invariant and the switch order
/// `old.on_pause, old.on_stop, new.on_start, new.on_resume`. On construction it
/// subscribes to every input event type on the bus and forwards those events
/// to the foreground application, if any.
pub struct AppManager {
    registry: Rc<RefCell<Registry>>,
    catalog: Rc<RefCell<Vec<AppInfo>>>,
    sender: flume::Sender<ShellCommand>,
}

impl AppManager {
    /// Creates an empty manager wired to `bus`.
    pub fn new(bus: Rc<EventBus>) -> Self {
        let (sender, commands) = flume::unbounded();
        let registry = Rc::new(RefCell::new(Registry {
            apps: Vec::new(),
            active: None,
            home_index: 0,
            commands,
            bus: Rc::clone(&bus),
        }));

        for kind in EventType::INPUT {
            let weak: Weak<RefCell<Registry>> = Rc::downgrade(&registry);
            bus.subscribe(kind, move |event| {
                let Some(registry) = weak.upgrade() else {
                    return;
                };
                match registry.try_borrow_mut() {
                    Ok(mut registry) => registry.forward(event),
                    Err(_) => log::error!(
                        "Dropped {} event: the application manager is busy (re-entrant dispatch).",
                        event.kind()
                    ),
                };
            });
        }
        log::info!("AppManager initialized.");

        Self {
            registry,
            catalog: Rc::default(),
            sender,
        }
    }

    /// Appends `app` to the registry. The first registration is the home
    /// application.
    pub fn register(&mut self, app: Box<dyn App>) {
        let mut registry = self.registry.borrow_mut();
        let index = registry.apps.len();
        self.catalog.borrow_mut().push(AppInfo {
            index,
            name: app.name().to_string(),
            icon: app.icon().to_string(),
        });
        log::debug!("Registered app #{index}: {}", app.name());
        registry.apps.push(app);
    }

    /// A handle applications use to request navigation.
    pub fn handle(&self) -> AppHandle {
        AppHandle::new(self.sender.clone(), Rc::clone(&self.catalog))
    }

    /// Every registered application, in registration order.
    pub fn installed_apps(&self) -> Vec<AppInfo> {
        self.catalog.borrow().clone()
    }

    /// Number of registered applications.
    pub fn len(&self) -> usize {
        self.registry.borrow().apps.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Makes the application at `index` the foreground application.
    ///
    /// Launching the already active application is a no-op.
    pub fn launch_by_index(&mut self, index: usize) -> Result<(), LaunchError> {
        let mut registry = self.registry.borrow_mut();
        registry.launch_index(index)?;
        registry.apply_pending();
        Ok(())
    }

    /// Makes the first application named `name` the foreground application.
    pub fn launch_by_name(&mut self, name: &str) -> Result<(), LaunchError> {
        let mut registry = self.registry.borrow_mut();
        registry.launch_by_name(name)?;
        registry.apply_pending();
        Ok(())
    }

    /// Switches back to the first registered application.
    pub fn return_to_home(&mut self) -> Result<(), LaunchError> {
        let mut registry = self.registry.borrow_mut();
        registry.return_to_home()?;
        registry.apply_pending();
        Ok(())
    }

    /// The foreground application, if any.
    pub fn active_app(&self) -> Option<Ref<'_, dyn App>> {
        let registry = self.registry.borrow();
        let index = registry.active?;
        Some(Ref::map(registry, |registry| &*registry.apps[index]))
    }

    /// Registration index of the foreground application.
    pub fn active_index(&self) -> Option<usize> {
        self.registry.borrow().active
    }

    /// Name of the foreground application.
    pub fn active_name(&self) -> Option<String> {
        self.active_app().map(|app| app.name().to_string())
    }

    /// Returns `true` when an application is in the foreground.
    pub fn has_active_app(&self) -> bool {
        self.active_index().is_some()
    }

    /// Index of the home application.
    pub fn home_index(&self) -> usize {
        self.registry.borrow().home_index
    }

    /// Advances the foreground application. No-op without one.
    pub fn update(&mut self, delta_seconds: f32) {
        let mut registry = self.registry.borrow_mut();
        if let Some(app) = registry.active_app() {
            app.update(delta_seconds);
        }
        registry.apply_pending();
    }

    /// Lets the foreground application draw. No-op without one.
    pub fn render(&mut self, surface: &mut dyn DrawSurface) {
        let mut registry = self.registry.borrow_mut();
        if let Some(app) = registry.active_app() {
            app.render(surface);
        }
        registry.apply_pending();
    }

    /// Stops the foreground application and leaves none active.
    pub fn shutdown(&mut self) {
        let mut registry = self.registry.borrow_mut();
        registry.shutdown();
        // Requests issued while stopping have nowhere to go.
        let dropped = registry.commands.try_iter().count();
        if dropped > 0 {
            log::debug!("Discarded {dropped} shell command(s) queued during shutdown.");
        }
    }
}
