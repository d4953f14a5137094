use std::{
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct File {
    pub path: Option<PathBuf>,
    pub text: String,
}

impl File {
    pub fn read(path: &Path) -> io::Result<Rc<File>> {
        Ok(Rc::new(File {
            text: fs::read_to_string(path)?,
            path: Some(path.to_path_buf()),
        }))
    }

    pub fn mem(text: &str) -> Rc<File> {
        Rc::new(File {
            path: None,
            text: text.to_string(),
        })
    }

    pub fn position(&self, pos: usize) -> (usize, usize) {
        let lines: Vec<_> = self.text[..pos].split('\n').collect();
        let line = lines.len().saturating_sub(1);
        let col = lines.last().map(|s| s.chars().count()).unwrap_or(0);
        (line, col)
    }

    /// Returns up to five numbered source lines ending at the line
    /// containing `pos`.
    pub fn context(&self, pos: usize) -> Vec<(usize, &str)> {
        let (line, _) = self.position(pos);
        let start = line.saturating_sub(4);
        self.text
            .lines()
            .enumerate()
            .skip(start)
            .take(line - start + 1)
            .collect()
    }
}
