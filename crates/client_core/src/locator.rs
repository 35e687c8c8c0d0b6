/// Maps a local filesystem path to a locator the image surface can load.
pub trait ResourceLocator {
    fn locate(&self, path: &str) -> String;
}

impl<F> ResourceLocator for F
where
    F: Fn(&str) -> String,
{
    fn locate(&self, path: &str) -> String {
        self(path)
    }
}

/// `file://` locators in the raw form the egui file loader reads back.
///
/// The path is not percent-encoded: the loader strips the scheme and opens
/// the remainder as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileUrlLocator;

impl ResourceLocator for FileUrlLocator {
    fn locate(&self, path: &str) -> String {
        if cfg!(windows) {
            format!("file:///{}", path.replace('\\', "/"))
        } else {
            format!("file://{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn keeps_spaces_and_non_ascii_unencoded() {
        assert_eq!(
            FileUrlLocator.locate("/tmp/my image.png"),
            "file:///tmp/my image.png"
        );
        assert_eq!(
            FileUrlLocator.locate("/tmp/画像 1.png"),
            "file:///tmp/画像 1.png"
        );
    }

    #[cfg(windows)]
    #[test]
    fn normalises_windows_separators() {
        assert_eq!(
            FileUrlLocator.locate(r"C:\Users\me\my image.png"),
            "file:///C:/Users/me/my image.png"
        );
    }

    #[test]
    fn closures_act_as_locators() {
        let locator = |path: &str| format!("asset://{path}");
        assert_eq!(locator.locate("/a.png"), "asset:///a.png");
    }
}
