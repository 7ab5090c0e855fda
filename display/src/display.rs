use anyhow::{Context, Result};
use sdl2::pixels::PixelFormatEnum;

use c8vm_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use c8vm_core::FrameBuffer;

const LIT: [u8; 3] = [0xFF, 0xFF, 0xFF];
const UNLIT: [u8; 3] = [0x00, 0x00, 0x00];

/// An SDL2 window showing the 64x32 monochrome screen, each pixel blown up to a
/// `scale` x `scale` square. Nothing is drawn until `render` is handed a frame.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Opens a centred window titled `title`, sized for a `scale`d screen.
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self> {
        let video_subsystem = sdl.video().map_err(anyhow::Error::msg)?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .context("unable to create window")?;
        let canvas = window
            .into_canvas()
            .build()
            .context("unable to create canvas")?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Expands a frame into packed RGB24 rows, lit pixels white and the rest black.
    fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(DISPLAY_WIDTH * DISPLAY_HEIGHT * 3);
        for &lit in frame.iter().flatten() {
            let colour = if lit != 0 { LIT } else { UNLIT };
            pixels.extend_from_slice(&colour);
        }
        pixels
    }

    /// Uploads a frame to a streaming texture and presents it.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<()> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .context("unable to create frame texture")?;

        let pixels = Display::frame_to_rgb24(frame);
        let row_len = self.width * 3;
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                for (y, row) in pixels.chunks(row_len).enumerate() {
                    buffer[y * pitch..y * pitch + row_len].copy_from_slice(row);
                }
            })
            .map_err(anyhow::Error::msg)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(anyhow::Error::msg)?;
        self.canvas.present();
        Ok(())
    }
}
