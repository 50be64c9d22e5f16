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


use std::cell::RefCell;
use std::rc::Rc;

/// A navigation request queued by an application for the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Switch to the application registered at this index.
    LaunchIndex(usize),
    /// Switch to the first application with this name.
    LaunchName(String),
    /// Switch to the home application.
    ReturnHome,
}

/// Read-only description of a registered application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Registration index.
    pub index: usize,
    /// The application's name.
    pub name: String,
    /// The application's icon, possibly empty.
    pub icon: String,
}

/// The capability an application uses to talk back to the shell.
///
/// Requests are queued on a channel and applied by the manager right after
/// the callback that issued them returns, so an application never re-enters
/// the manager from inside one of its own lifecycle callbacks.
#[derive(Debug, Clone)]
pub struct AppHandle {
    sender: flume::Sender<ShellCommand>,
    catalog: Rc<RefCell<Vec<AppInfo>>>,
}

impl AppHandle {
    pub(crate) fn new(
        sender: flume::Sender<ShellCommand>,
        catalog: Rc<RefCell<Vec<AppInfo>>>,
    ) -> Self {
        Self { sender, catalog }
    }

    /// Requests a switch to the application named `name`.
    pub fn launch(&self, name: impl Into<String>) {
        self.send(ShellCommand::LaunchName(name.into()));
    }

    /// Requests a switch to the application at `index`.
    pub fn launch_index(&self, index: usize) {
        self.send(ShellCommand::LaunchIndex(index));
    }

    /// Requests a switch back to the home application.
    pub fn return_to_home(&self) {
        self.send(ShellCommand::ReturnHome);
    }

    /// Snapshot of every registered application, in registration order.
    pub fn installed_apps(&self) -> Vec<AppInfo> {
        self.catalog.borrow().clone()
    }

    fn send(&self, command: ShellCommand) {
        if let Err(e) = self.sender.send(command) {
            log::error!("Failed to queue shell command: {e}. Manager likely dropped.");
        }
    }
}
