// RustPixel
// copyright zipxing@hotmail.com 2022~2024

//! Implements shape rasterization used by the cell buffer
//!
//! line implements bresenham lines, each step tagged with the
//! direction it took so text mode can pick | - / \ symbols

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSym {
    Start = 0,
    VLine = 1,
    HLine = 2,
    Slash = 3,
    BackSlash = 4,
}

impl LineSym {
    pub fn symbol(self) -> char {
        match self {
            LineSym::Start => '*',
            LineSym::VLine => '|',
            LineSym::HLine => '-',
            LineSym::Slash => '/',
            LineSym::BackSlash => '\\',
        }
    }
}

/// Bresenham line from (x0, y0) to (x1, y1), both ends included.
/// Rows grow downwards, so a step with matching x/y signs is a backslash.
pub fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32, LineSym)> {
    let mut res: Vec<(i32, i32, LineSym)> = Vec::new();

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = if dx > dy { dx } else { -dy } / 2;
    let mut err2: i32;

    let mut x = x0;
    let mut y = y0;

    let mut flag: u8 = 0;

    loop {
        let sym_auto = match flag {
            1 => LineSym::HLine,
            2 => LineSym::VLine,
            3 => {
                if sx == sy {
                    LineSym::BackSlash
                } else {
                    LineSym::Slash
                }
            }
            _ => LineSym::Start,
        };
        res.push((x, y, sym_auto));

        if x == x1 && y == y1 {
            break;
        }

        err2 = err;
        flag = 0;

        if err2 > -dx {
            err -= dy;
            x += sx;
            flag += 1;
        }

        if err2 < dy {
            err += dx;
            y += sy;
            flag += 2;
        }
    }
    res
}
