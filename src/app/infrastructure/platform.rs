/// Best-effort probe of the OS "prefers dark color scheme" signal.
///
/// Consulted only when no theme preference has been persisted yet. Every
/// probe failure falls back to light.
pub fn detect_system_dark_mode() -> bool {
    dark_mode_probe().unwrap_or(false)
}

// Windows: AppsUseLightTheme registry value (0 = dark, 1 = light)
#[cfg(target_os = "windows")]
fn dark_mode_probe() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    let value: u32 = personalize.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

// Linux: ask gsettings, first for the GTK theme name, then for the newer
// color-scheme key used outside GNOME proper
#[cfg(target_os = "linux")]
fn dark_mode_probe() -> Option<bool> {
    use std::process::Command;

    if let Ok(output) = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
        .output()
    {
        let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
        if theme.contains("dark") {
            return Some(true);
        }
    }

    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .ok()?;
    let scheme = String::from_utf8_lossy(&output.stdout);
    Some(scheme.contains("prefer-dark"))
}

// macOS: AppleInterfaceStyle is only set when dark mode is on
#[cfg(target_os = "macos")]
fn dark_mode_probe() -> Option<bool> {
    use std::process::Command;

    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if !output.status.success() {
        return Some(false);
    }
    let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
    Some(style.contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn dark_mode_probe() -> Option<bool> {
    None
}
