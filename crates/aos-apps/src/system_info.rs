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


//! Host and shell details, refreshed whenever the screen is shown.

use crate::theme::{draw_header, draw_hint, BACK_HINT};
use aos_core::{App, AppHandle, Color, DrawSurface, Event, EventType, Rect};
use sysinfo::System;

const UPTIME_LABEL: &str = "Uptime:";
const LINE_HEIGHT: i32 = 35;

#[derive(Debug, Clone, PartialEq, Eq)]
struct InfoItem {
    label: &'static str,
    value: String,
}

impl InfoItem {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Formats seconds as `HH:MM:SS`.
fn format_uptime(seconds: f32) -> String {
    let total = seconds.max(0.0) as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Shows OS, CPU and memory details plus how long the app has been in use.
pub struct SysInfoApp {
    handle: AppHandle,
    system: System,
    items: Vec<InfoItem>,
    uptime_seconds: f32,
    since_refresh: f32,
}

impl SysInfoApp {
    pub fn new(handle: AppHandle) -> Self {
        Self {
            handle,
            system: System::new(),
            items: Vec::new(),
            uptime_seconds: 0.0,
            since_refresh: 0.0,
        }
    }

    fn refresh_system_info(&mut self) {
        self.system.refresh_memory();
        self.system.refresh_cpu_all();

        let platform = System::name().unwrap_or_else(|| "Unknown".to_string());
        let cpu = match self.system.cpus().first() {
            Some(first) if !first.brand().is_empty() => {
                format!("{} ({} cores)", first.brand(), self.system.cpus().len())
            }
            _ => format!("{} ({} cores)", std::env::consts::ARCH, self.system.cpus().len()),
        };

        self.items = vec![
            InfoItem::new("OS Name:", "A-OS (Application Operating System)"),
            InfoItem::new("Version:", concat!("v", env!("CARGO_PKG_VERSION"))),
            InfoItem::new("Platform:", platform),
            InfoItem::new(
                "Kernel:",
                System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
            ),
            InfoItem::new("Architecture:", std::env::consts::ARCH),
            InfoItem::new("CPU:", cpu),
            InfoItem::new(
                "Memory:",
                format!("{} MB", self.system.total_memory() / 1024 / 1024),
            ),
            InfoItem::new(
                "Host:",
                System::host_name().unwrap_or_else(|| "Unknown".to_string()),
            ),
            InfoItem::new("Graphics:", "wgpu"),
            InfoItem::new(UPTIME_LABEL, format_uptime(self.uptime_seconds)),
        ];
        log::debug!("SysInfoApp: Collected {} entries.", self.items.len());
    }

    fn value_of(&self, label: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.value.as_str())
    }
}

impl App for SysInfoApp {
    fn on_start(&mut self) {
        log::debug!("SysInfoApp: Started");
        self.refresh_system_info();
    }

    fn on_resume(&mut self) {
        self.refresh_system_info();
    }

    fn on_stop(&mut self) {
        log::debug!("SysInfoApp: Stopped");
    }

    fn update(&mut self, delta_seconds: f32) {
        self.uptime_seconds += delta_seconds;
        self.since_refresh += delta_seconds;
        if self.since_refresh < 1.0 {
            return;
        }
        self.since_refresh = 0.0;

        let uptime = format_uptime(self.uptime_seconds);
        if let Some(item) = self.items.iter_mut().find(|item| item.label == UPTIME_LABEL) {
            item.value = uptime;
        }
    }

    fn render(&mut self, surface: &mut dyn DrawSurface) {
        draw_header(surface, "System Information", Color::rgb(40, 40, 80));
        surface.fill_rect(
            Rect::new(50, 100, surface.width() - 100, 2),
            Color::rgb(100, 100, 150),
        );

        for (line, item) in self.items.iter().enumerate() {
            let y = 120 + line as i32 * LINE_HEIGHT;
            surface.draw_text(item.label, 50, y, Color::rgb(150, 150, 200), 20);
            surface.draw_text(&item.value, 300, y, Color::WHITE, 20);
        }

        draw_hint(surface, BACK_HINT);
    }

    fn on_event(&mut self, event: &Event) {
        if event.kind() == EventType::KeyBack {
            log::debug!("SysInfoApp: Returning to home");
            self.handle.return_to_home();
        }
    }

    fn name(&self) -> &str {
        "System Info"
    }

    fn icon(&self) -> &str {
        "info"
    }
}
