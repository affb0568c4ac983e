use std::{
    borrow::Cow,
    env, io,
    path::{Component, Path, PathBuf},
};

pub trait AbsolutePathExt {
    /// Join relative paths onto the current directory and drop `.`/`..`
    /// components without touching the filesystem.
    fn as_absolute(&self) -> io::Result<Cow<'_, Path>>;
}

impl AbsolutePathExt for Path {
    fn as_absolute(&self) -> io::Result<Cow<'_, Path>> {
        let joined = if self.is_absolute() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(env::current_dir()?.join(self))
        };
        if !joined
            .components()
            .any(|c| matches!(c, Component::CurDir | Component::ParentDir))
        {
            return Ok(joined);
        }
        Ok(Cow::Owned(normalize(&joined)))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
