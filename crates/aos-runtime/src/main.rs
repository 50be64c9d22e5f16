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


//! Boots A-OS: logging, configuration, window, GPU, applications, loop.

use anyhow::{Context, Result};
use aos_apps::{HomeApp, SettingsApp, SysInfoApp};
use aos_core::{AppManager, EventBus, Shell, ShellConfig};
use aos_infra::{AudioManager, WgpuDisplay, WinitPlatform};
use std::path::Path;
use std::rc::Rc;

/// Environment variable naming an optional JSON configuration file.
const CONFIG_ENV: &str = "AOS_CONFIG";

fn load_config() -> Result<ShellConfig> {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        log::info!("{CONFIG_ENV} not set; using the default configuration.");
        return Ok(ShellConfig::default());
    };
    read_config(Path::new(&path))
}

fn read_config(path: &Path) -> Result<ShellConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Warn)
        .init();
    log::info!("A-OS v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    let bus = Rc::new(match config.max_events_per_drain {
        Some(limit) => EventBus::with_drain_limit(limit),
        None => EventBus::new(),
    });

    let platform = WinitPlatform::new(&config).context("Failed to initialize the platform")?;
    let display = WgpuDisplay::new(platform.window(), &config)
        .context("Failed to initialize the display")?;
    let mut audio = AudioManager::new();
    audio.initialize();

    let mut manager = AppManager::new(Rc::clone(&bus));
    // Order matters: the first registration is the home application.
    manager.register(Box::new(HomeApp::new(manager.handle())));
    manager.register(Box::new(SettingsApp::new(manager.handle())));
    manager.register(Box::new(SysInfoApp::new(manager.handle())));
    log::info!("{} applications registered.", manager.len());

    manager
        .launch_by_index(0)
        .context("Failed to launch the home application")?;

    let mut shell = Shell::new(bus, manager, platform, display).with_clear_color(config.clear_color);
    shell.run();

    audio.shutdown();
    log::info!("A-OS terminated.");
    Ok(())
}
