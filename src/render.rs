//! Draws a maze as a PNG image, one square block of pixels per cell.
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use image::{Rgb, RgbImage};
use log::info;

use crate::cell::{Cell, CellState};
use crate::error::{MazeError, Result};
use crate::maze::Maze;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Largest accepted image side in pixels.
pub const MAX_IMAGE_SIDE: u32 = 8192;

/// Keyword of the PNG text chunk carrying the title.
pub const TITLE_KEYWORD: &str = "Title";

/// Colour of each cell state. All five are distinct.
pub fn color(state: CellState) -> Rgb<u8> {
    match state {
        CellState::Open => Rgb([68, 1, 84]),
        CellState::Wall => Rgb([253, 231, 37]),
        CellState::Closed => Rgb([59, 82, 139]),
        CellState::Frontier => Rgb([94, 201, 98]),
        CellState::OnPath => Rgb([230, 57, 70]),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    /// Side length of one cell in pixels.
    pub cell_size: u32,
    /// Blank border around the maze, in cells.
    pub margin: u32,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            output_dir: PathBuf::from("figures"),
            cell_size: 8,
            margin: 2,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Renderer {
    pub config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Renderer {
        Renderer { config }
    }

    /// Location of the image written for `algorithm`.
    pub fn output_path(&self, algorithm: &str) -> PathBuf {
        self.config.output_dir.join(format!("{algorithm}-maze.png"))
    }

    /// Side length in pixels of the image of a maze with `dimension` rows.
    pub fn image_side(&self, dimension: usize) -> Result<u32> {
        let RenderConfig { cell_size, margin, .. } = self.config;
        u32::try_from(dimension)
            .ok()
            .and_then(|d| d.checked_add(margin.checked_mul(2)?))
            .and_then(|cells| cells.checked_mul(cell_size.max(1)))
            .filter(|&side| side <= MAX_IMAGE_SIDE)
            .ok_or(MazeError::ImageTooLarge {
                dimension,
                cell_size,
                margin,
            })
    }

    pub fn to_image(&self, maze: &Maze) -> Result<RgbImage> {
        let side = self.image_side(maze.dimension())?;
        let cell_size = self.config.cell_size.max(1);
        let offset = self.config.margin * cell_size;
        let mut img = RgbImage::from_pixel(side, side, BACKGROUND);
        for (row, states) in maze.rows().enumerate() {
            for (col, &state) in states.iter().enumerate() {
                let x0 = offset + col as u32 * cell_size;
                let y0 = offset + row as u32 * cell_size;
                let c = color(state);
                for dy in 0..cell_size {
                    for dx in 0..cell_size {
                        img.put_pixel(x0 + dx, y0 + dy, c);
                    }
                }
            }
        }
        Ok(img)
    }

    pub fn title(algorithm: &str, path_length: Option<usize>) -> String {
        match path_length {
            Some(length) => format!("{algorithm} maze, path length {length}"),
            None => format!("{algorithm} maze, no path found"),
        }
    }

    /// Writes `{output_dir}/{algorithm}-maze.png` and returns its path. The title, including
    /// the path length, is stored in a `Title` text chunk of the PNG.
    pub fn render(
        &self,
        maze: &Maze,
        algorithm: &str,
        path_length: Option<usize>,
    ) -> Result<PathBuf> {
        let img = self.to_image(maze)?;
        fs::create_dir_all(&self.config.output_dir)?;
        let target = self.output_path(algorithm);
        let title = Renderer::title(algorithm, path_length);

        let mut encoder = png::Encoder::new(
            BufWriter::new(File::create(&target)?),
            img.width(),
            img.height(),
        );
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.add_text_chunk(TITLE_KEYWORD.to_string(), title.clone())?;
        let mut writer = encoder.write_header()?;
        writer.write_image_data(img.as_raw())?;
        writer.finish()?;

        info!("Rendered \"{title}\" to {}", target.display());
        Ok(target)
    }

    /// Colour of `cell` in an image produced by [to_image](Self::to_image).
    pub fn pixel_of(&self, img: &RgbImage, cell: Cell) -> Rgb<u8> {
        let cell_size = self.config.cell_size.max(1);
        let offset = self.config.margin * cell_size;
        *img.get_pixel(
            offset + cell.col as u32 * cell_size,
            offset + cell.row as u32 * cell_size,
        )
    }
}
