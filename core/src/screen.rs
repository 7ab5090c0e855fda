use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is indexed as [y][x]; each pixel is 0 or 1
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Screen
/// A 64x32 monochrome frame buffer and a flag telling the host whether it changed
/// since it was last consumed.
#[derive(Copy, Clone)]
pub struct Screen {
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
        }
    }

    pub fn clear(&mut self) {
        self.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.draw_flag = true;
    }

    /// XORs an 8-pixel wide sprite onto the frame buffer at (x, y).
    /// Pixels that fall off an edge wrap around to the opposite one.
    /// Returns whether any set pixel was turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in sprite.iter().enumerate() {
            let py = (y as usize + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                if (byte >> (7 - bit)) & 1 == 0 {
                    continue;
                }
                let px = (x as usize + bit) % DISPLAY_WIDTH;
                let pixel = &mut self.frame_buffer[py][px];
                collision |= *pixel == 1;
                *pixel ^= 1;
            }
        }
        self.draw_flag = true;
        collision
    }

    /// Reads and clears the draw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.draw_flag, false)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sets_draw_flag() {
        let mut screen = Screen::new();
        screen.frame_buffer[3][3] = 1;
        screen.clear();
        assert_eq!(screen.frame_buffer[3][3], 0);
        assert!(screen.draw_flag);
    }

    #[test]
    fn test_draw_wraps_horizontally() {
        let mut screen = Screen::new();
        screen.draw_sprite(63, 0, &[0b1100_0000]);
        assert_eq!(screen.frame_buffer[0][63], 1);
        assert_eq!(screen.frame_buffer[0][0], 1);
    }

    #[test]
    fn test_draw_wraps_vertically() {
        let mut screen = Screen::new();
        screen.draw_sprite(0, 31, &[0x80, 0x80]);
        assert_eq!(screen.frame_buffer[31][0], 1);
        assert_eq!(screen.frame_buffer[0][0], 1);
    }

    #[test]
    fn test_start_position_wraps() {
        let mut screen = Screen::new();
        screen.draw_sprite(64 + 2, 32 + 1, &[0x80]);
        assert_eq!(screen.frame_buffer[1][2], 1);
    }

    #[test]
    fn test_collision_survives_later_rows() {
        let mut screen = Screen::new();
        screen.frame_buffer[0][0] = 1;
        assert!(screen.draw_sprite(0, 0, &[0x80, 0x80, 0x80]));
        assert_eq!(screen.frame_buffer[0][0], 0);
        assert_eq!(screen.frame_buffer[1][0], 1);
    }

    #[test]
    fn test_take_dirty_clears_flag() {
        let mut screen = Screen::new();
        assert!(!screen.take_dirty());
        screen.draw_sprite(0, 0, &[0x80]);
        assert!(screen.take_dirty());
        assert!(!screen.take_dirty());
    }
}
