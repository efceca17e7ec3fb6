//! Build script for the Dash-Lens Tauri app.

fn main() {
    tauri_build::build();
}
