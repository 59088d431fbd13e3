use crate::app::infrastructure::storage::Storage;

/// Storage key for the persisted theme preference.
pub const LIGHT_KEY: &str = "light";

/// Light/dark preference, persisted across sessions.
///
/// After `init` the flag is always exactly one of light or dark; there is no
/// "unset" state at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePrefs {
    pub light: bool,
}

impl ThemePrefs {
    /// Hydrate from storage, falling back to the OS color-scheme hint.
    ///
    /// A persisted value always wins over the hint. When nothing is persisted
    /// the derived value is written back immediately so the next run sees it.
    /// Performs exactly one storage read and at most one write.
    pub fn init(storage: &mut dyn Storage, prefers_dark: bool) -> Self {
        match storage.get(LIGHT_KEY) {
            Some(value) => Self {
                light: value == "true",
            },
            None => {
                let prefs = Self {
                    light: !prefers_dark,
                };
                prefs.save(storage);
                prefs
            }
        }
    }

    /// Flip the preference and persist the new value.
    pub fn toggle(&mut self, storage: &mut dyn Storage) {
        self.light = !self.light;
        self.save(storage);
    }

    /// Persist as the literal string `"true"` or `"false"`. Idempotent.
    ///
    /// Write failures are swallowed: losing a cosmetic preference is not
    /// worth interrupting the user.
    pub fn save(&self, storage: &mut dyn Storage) {
        let _ = storage.set(LIGHT_KEY, if self.light { "true" } else { "false" });
    }

    pub fn is_dark(&self) -> bool {
        !self.light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::storage::MemoryStorage;

    #[test]
    fn test_init_uses_persisted_value() {
        let mut storage = MemoryStorage::default();
        storage.set(LIGHT_KEY, "true").unwrap();

        // OS hint says dark, but the persisted value wins
        let prefs = ThemePrefs::init(&mut storage, true);
        assert!(prefs.light);
    }

    #[test]
    fn test_init_persisted_false() {
        let mut storage = MemoryStorage::default();
        storage.set(LIGHT_KEY, "false").unwrap();

        let prefs = ThemePrefs::init(&mut storage, false);
        assert!(!prefs.light);
    }

    #[test]
    fn test_init_derives_from_os_hint_and_persists() {
        let mut storage = MemoryStorage::default();

        let prefs = ThemePrefs::init(&mut storage, true);
        assert!(!prefs.light);
        assert_eq!(storage.get(LIGHT_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_init_light_os_hint() {
        let mut storage = MemoryStorage::default();

        let prefs = ThemePrefs::init(&mut storage, false);
        assert!(prefs.light);
        assert_eq!(storage.get(LIGHT_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_unrecognized_value_decodes_as_dark() {
        let mut storage = MemoryStorage::default();
        storage.set(LIGHT_KEY, "yes please").unwrap();

        let prefs = ThemePrefs::init(&mut storage, false);
        assert!(!prefs.light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut storage = MemoryStorage::default();
        let mut prefs = ThemePrefs::init(&mut storage, false);
        assert!(prefs.light);

        prefs.toggle(&mut storage);
        assert!(!prefs.light);
        assert_eq!(storage.get(LIGHT_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut storage = MemoryStorage::default();
        let mut prefs = ThemePrefs::init(&mut storage, true);
        let before = prefs;

        prefs.toggle(&mut storage);
        prefs.toggle(&mut storage);
        assert_eq!(prefs, before);
    }

    #[test]
    fn test_save_init_round_trip() {
        let mut storage = MemoryStorage::default();
        let prefs = ThemePrefs { light: false };
        prefs.save(&mut storage);

        // Simulated reload: a fresh init against the same storage
        let reloaded = ThemePrefs::init(&mut storage, false);
        assert_eq!(reloaded, prefs);
    }

    #[test]
    fn test_is_dark() {
        assert!(ThemePrefs { light: false }.is_dark());
        assert!(!ThemePrefs { light: true }.is_dark());
    }
}
