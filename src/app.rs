use std::path::{Path, PathBuf};

use clap::Parser;
use model::{Model, ModelBuilder, ModelError, ObjFile};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(version, about = "Load Wavefront .obj files into indexed triangle meshes")]
pub struct Args {
    /// Files to load, a file that fails does not stop the others
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Center each model on the X axis and scale it to a width of 1
    #[arg(long)]
    pub unit_width: bool,

    /// More logs, -v for debug and -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub struct App {
    args: Args,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct LoadSummary {
    loaded: usize,
    failed: usize,
}

impl App {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let summary = self.load_all();
        if summary.failed > 0 {
            anyhow::bail!(
                "Failed to load {} of {} files",
                summary.failed,
                summary.failed + summary.loaded
            );
        }
        Ok(())
    }

    fn load_all(&self) -> LoadSummary {
        self.args
            .files
            .iter()
            .fold(LoadSummary::default(), |mut summary, file| {
                match self.load(file) {
                    Ok(model) => {
                        info!(
                            file = %file.display(),
                            vertices = model.vertices().len(),
                            triangles = model.triangle_count(),
                            synthesized_normals = model.synthesized_normals(),
                            "model loaded"
                        );
                        summary.loaded += 1;
                    }
                    Err(err) => {
                        error!(file = %file.display(), "Failed to load model: {err}");
                        summary.failed += 1;
                    }
                }
                summary
            })
    }

    fn load(&self, file: &Path) -> Result<Model, ModelError> {
        ModelBuilder::default()
            .normalize_to_unit_width(self.args.unit_width)
            .load(ObjFile(file))
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    fn app(files: Vec<PathBuf>) -> App {
        App::new(Args {
            files,
            unit_width: false,
            verbose: 0,
        })
    }

    #[test]
    fn failing_file_does_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let valid = dir.path().join("triangle.obj");
        let unsupported = dir.path().join("surface.obj");
        fs::write(&valid, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        fs::write(&unsupported, "v 0 0 0\nsurf 0 1 0 1 1 2 3\n").unwrap();

        let batch = app(vec![
            unsupported,
            dir.path().join("missing.obj"),
            valid.clone(),
        ]);
        assert_eq!(
            batch.load_all(),
            LoadSummary {
                loaded: 1,
                failed: 2
            }
        );
        assert!(batch.run().is_err());

        assert!(app(vec![valid]).run().is_ok());
    }

    #[test]
    fn args() {
        let args = Args::try_parse_from(["obj-loader", "-vv", "--unit-width", "a.obj", "b.obj"])
            .unwrap();
        assert_eq!(args.verbose, 2);
        assert!(args.unit_width);
        assert_eq!(args.files, [PathBuf::from("a.obj"), PathBuf::from("b.obj")]);

        assert!(Args::try_parse_from(["obj-loader"]).is_err());
    }
}
