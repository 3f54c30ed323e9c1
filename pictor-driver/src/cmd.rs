//! SSD1306 command set.

#![allow(dead_code)]

/// Control byte: the bytes that follow are commands.
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: the bytes that follow are framebuffer data.
pub const CONTROL_DATA: u8 = 0x40;

pub const SET_LOW_COLUMN: u8 = 0x00;
pub const SET_HIGH_COLUMN: u8 = 0x10;
pub const SET_MEM_MODE: u8 = 0x20;
pub const MEM_MODE_HORIZONTAL: u8 = 0x00;
pub const MEM_MODE_VERTICAL: u8 = 0x01;
pub const MEM_MODE_PAGE: u8 = 0x02;
pub const SET_START_LINE: u8 = 0x40;
pub const SET_CONTRAST: u8 = 0x81;
pub const SET_CHARGE_PUMP: u8 = 0x8D;
pub const SET_SEG_REMAP_OFF: u8 = 0xA0;
pub const SET_SEG_REMAP: u8 = 0xA1;
pub const RESUME_FROM_RAM: u8 = 0xA4;
pub const ENTIRE_ON: u8 = 0xA5;
pub const SET_NORMAL: u8 = 0xA6;
pub const SET_INVERSE: u8 = 0xA7;
pub const SET_MUX_RATIO: u8 = 0xA8;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const SET_PAGE_ADDR: u8 = 0xB0;
pub const SET_COM_SCAN_INC: u8 = 0xC0;
pub const SET_COM_SCAN_DEC: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOM_DETECT: u8 = 0xDB;
