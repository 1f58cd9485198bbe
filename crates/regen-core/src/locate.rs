use regen_types::WindowGeometry;

use crate::capability::WindowSource;
use crate::error::SyncError;

/// First window whose title contains `needle`.
///
/// Enumeration order decides between several matches.
pub fn locate_window<W: WindowSource + ?Sized>(
    source: &W,
    needle: &str,
) -> Result<WindowGeometry, SyncError> {
    let windows = match source.list_windows() {
        Ok(windows) => windows,
        Err(e) => {
            tracing::warn!("Window enumeration failed: {e:#}");
            return Err(SyncError::WindowNotFound(needle.to_string()));
        }
    };

    windows
        .into_iter()
        .find(|w| w.title.contains(needle))
        .map(|w| w.geometry)
        .ok_or_else(|| SyncError::WindowNotFound(needle.to_string()))
}

#[cfg(test)]
mod tests {
    use regen_types::WindowInfo;

    use super::*;

    struct FixedWindows(Vec<WindowInfo>);

    impl WindowSource for FixedWindows {
        fn list_windows(&self) -> anyhow::Result<Vec<WindowInfo>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenWindows;

    impl WindowSource for BrokenWindows {
        fn list_windows(&self) -> anyhow::Result<Vec<WindowInfo>> {
            anyhow::bail!("display server went away")
        }
    }

    fn window(title: &str, left: i32) -> WindowInfo {
        WindowInfo {
            title: title.to_string(),
            geometry: WindowGeometry {
                left,
                top: 0,
                width: 800,
                height: 600,
            },
        }
    }

    #[test]
    fn first_matching_title_wins() {
        let source = FixedWindows(vec![
            window("Terminal", 0),
            window("Wplace - Firefox", 10),
            window("Wplace - Chrome", 20),
        ]);
        let geometry = locate_window(&source, "Wplace").unwrap();
        assert_eq!(geometry.left, 10);
    }

    #[test]
    fn match_is_case_sensitive() {
        let source = FixedWindows(vec![window("wplace", 0)]);
        assert_eq!(
            locate_window(&source, "Wplace"),
            Err(SyncError::WindowNotFound("Wplace".to_string()))
        );
    }

    #[test]
    fn enumeration_error_reads_as_not_found() {
        assert!(matches!(
            locate_window(&BrokenWindows, "Wplace"),
            Err(SyncError::WindowNotFound(_))
        ));
    }
}
