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


//! # A-OS Apps
//!
//! The applications shipped with the shell. Each one receives an
//! [`AppHandle`](aos_core::AppHandle) at construction and uses it to navigate.

mod home;
mod settings;
mod system_info;
mod theme;

pub use home::HomeApp;
pub use settings::SettingsApp;
pub use system_info::SysInfoApp;
