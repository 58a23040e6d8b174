use std::env;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use lofty::file::AudioFile;

use spectropanel::panel::PanelGeometry;
use spectropanel::render::{self, RenderOutcome};
use spectropanel::runtime::{Engine, PaintSource, TrackChange};
use spectropanel::workdir::WorkDir;

/// Standalone harness: resolve (and, on a cache miss, render) the
/// spectrogram for one audio file, then print the artifact path a panel
/// would paint.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(file) = args.next() else {
        eprintln!("usage: spectropanel <audio file> [working dir] [panel width] [panel height]");
        std::process::exit(2);
    };
    let root = match args.next() {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir()?,
    };
    let width: u32 = match args.next() {
        Some(w) => w.parse()?,
        None => 900,
    };
    let height: u32 = match args.next() {
        Some(h) => h.parse()?,
        None => 300,
    };

    let file = PathBuf::from(file);
    let duration_ms = probe_duration_ms(&file);

    let mut engine = Engine::new(WorkDir::new(root))?;
    let caps = engine.capabilities();
    println!("{}: {}", caps.name, caps.description);

    let change = TrackChange {
        file,
        duration_ms,
        panel: PanelGeometry { width, height },
    };

    let (outcome_tx, outcome_rx) = mpsc::channel::<RenderOutcome>();
    if let Some(plan) = engine.on_track_changed(change) {
        println!(
            "rendering: {} {}",
            plan.renderer.display(),
            plan.command_line()
        );
        render::spawn_render(plan, outcome_tx);
        let outcome = outcome_rx.recv()?;
        if let Err(e) = &outcome.result {
            eprintln!("spectropanel: {e}");
        }
        engine.on_render_finished(outcome);
    }

    match engine.paint_source() {
        PaintSource::Artifact(path) => println!("spectrogram: {}", path.display()),
        PaintSource::Placeholder(path) => println!("placeholder: {}", path.display()),
        PaintSource::Blank => println!("no spectrogram available"),
    }

    Ok(())
}

/// Duration of the audio file in milliseconds; 0 when it cannot be
/// probed, which the engine treats like a stream.
fn probe_duration_ms(path: &Path) -> i64 {
    match lofty::read_from_path(path) {
        Ok(tagged) => tagged.properties().duration().as_millis() as i64,
        Err(_) => 0,
    }
}
