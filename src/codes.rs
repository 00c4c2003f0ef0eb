//! Event codes of the Linux input ABI (`linux/input-event-codes.h`).
//!
//! Each constant pairs the code with its event type, so it can be passed
//! straight to [`DeviceBuilder::enable_capability`](crate::DeviceBuilder::enable_capability)
//! and to the [`VirtualController`](crate::VirtualController) helpers.

use crate::protocol::{Capability, EventType};

// Synchronization

pub const SYN_REPORT: Capability = Capability::new(EventType::Synchronization, 0);
pub const SYN_CONFIG: Capability = Capability::new(EventType::Synchronization, 1);
pub const SYN_MT_REPORT: Capability = Capability::new(EventType::Synchronization, 2);
pub const SYN_DROPPED: Capability = Capability::new(EventType::Synchronization, 3);

// Keys

pub const KEY_RESERVED: Capability = Capability::key(0);
pub const KEY_ESC: Capability = Capability::key(1);
pub const KEY_1: Capability = Capability::key(2);
pub const KEY_2: Capability = Capability::key(3);
pub const KEY_3: Capability = Capability::key(4);
pub const KEY_4: Capability = Capability::key(5);
pub const KEY_5: Capability = Capability::key(6);
pub const KEY_6: Capability = Capability::key(7);
pub const KEY_7: Capability = Capability::key(8);
pub const KEY_8: Capability = Capability::key(9);
pub const KEY_9: Capability = Capability::key(10);
pub const KEY_0: Capability = Capability::key(11);
pub const KEY_MINUS: Capability = Capability::key(12);
pub const KEY_EQUAL: Capability = Capability::key(13);
pub const KEY_BACKSPACE: Capability = Capability::key(14);
pub const KEY_TAB: Capability = Capability::key(15);
pub const KEY_Q: Capability = Capability::key(16);
pub const KEY_W: Capability = Capability::key(17);
pub const KEY_E: Capability = Capability::key(18);
pub const KEY_R: Capability = Capability::key(19);
pub const KEY_T: Capability = Capability::key(20);
pub const KEY_Y: Capability = Capability::key(21);
pub const KEY_U: Capability = Capability::key(22);
pub const KEY_I: Capability = Capability::key(23);
pub const KEY_O: Capability = Capability::key(24);
pub const KEY_P: Capability = Capability::key(25);
pub const KEY_LEFTBRACE: Capability = Capability::key(26);
pub const KEY_RIGHTBRACE: Capability = Capability::key(27);
pub const KEY_ENTER: Capability = Capability::key(28);
pub const KEY_LEFTCTRL: Capability = Capability::key(29);
pub const KEY_A: Capability = Capability::key(30);
pub const KEY_S: Capability = Capability::key(31);
pub const KEY_D: Capability = Capability::key(32);
pub const KEY_F: Capability = Capability::key(33);
pub const KEY_G: Capability = Capability::key(34);
pub const KEY_H: Capability = Capability::key(35);
pub const KEY_J: Capability = Capability::key(36);
pub const KEY_K: Capability = Capability::key(37);
pub const KEY_L: Capability = Capability::key(38);
pub const KEY_SEMICOLON: Capability = Capability::key(39);
pub const KEY_APOSTROPHE: Capability = Capability::key(40);
pub const KEY_GRAVE: Capability = Capability::key(41);
pub const KEY_LEFTSHIFT: Capability = Capability::key(42);
pub const KEY_BACKSLASH: Capability = Capability::key(43);
pub const KEY_Z: Capability = Capability::key(44);
pub const KEY_X: Capability = Capability::key(45);
pub const KEY_C: Capability = Capability::key(46);
pub const KEY_V: Capability = Capability::key(47);
pub const KEY_B: Capability = Capability::key(48);
pub const KEY_N: Capability = Capability::key(49);
pub const KEY_M: Capability = Capability::key(50);
pub const KEY_COMMA: Capability = Capability::key(51);
pub const KEY_DOT: Capability = Capability::key(52);
pub const KEY_SLASH: Capability = Capability::key(53);
pub const KEY_RIGHTSHIFT: Capability = Capability::key(54);
pub const KEY_KPASTERISK: Capability = Capability::key(55);
pub const KEY_LEFTALT: Capability = Capability::key(56);
pub const KEY_SPACE: Capability = Capability::key(57);
pub const KEY_CAPSLOCK: Capability = Capability::key(58);
pub const KEY_F1: Capability = Capability::key(59);
pub const KEY_F2: Capability = Capability::key(60);
pub const KEY_F3: Capability = Capability::key(61);
pub const KEY_F4: Capability = Capability::key(62);
pub const KEY_F5: Capability = Capability::key(63);
pub const KEY_F6: Capability = Capability::key(64);
pub const KEY_F7: Capability = Capability::key(65);
pub const KEY_F8: Capability = Capability::key(66);
pub const KEY_F9: Capability = Capability::key(67);
pub const KEY_F10: Capability = Capability::key(68);
pub const KEY_NUMLOCK: Capability = Capability::key(69);
pub const KEY_SCROLLLOCK: Capability = Capability::key(70);
pub const KEY_KP7: Capability = Capability::key(71);
pub const KEY_KP8: Capability = Capability::key(72);
pub const KEY_KP9: Capability = Capability::key(73);
pub const KEY_KPMINUS: Capability = Capability::key(74);
pub const KEY_KP4: Capability = Capability::key(75);
pub const KEY_KP5: Capability = Capability::key(76);
pub const KEY_KP6: Capability = Capability::key(77);
pub const KEY_KPPLUS: Capability = Capability::key(78);
pub const KEY_KP1: Capability = Capability::key(79);
pub const KEY_KP2: Capability = Capability::key(80);
pub const KEY_KP3: Capability = Capability::key(81);
pub const KEY_KP0: Capability = Capability::key(82);
pub const KEY_KPDOT: Capability = Capability::key(83);

pub const KEY_ZENKAKUHANKAKU: Capability = Capability::key(85);
pub const KEY_102ND: Capability = Capability::key(86);
pub const KEY_F11: Capability = Capability::key(87);
pub const KEY_F12: Capability = Capability::key(88);
pub const KEY_RO: Capability = Capability::key(89);
pub const KEY_KATAKANA: Capability = Capability::key(90);
pub const KEY_HIRAGANA: Capability = Capability::key(91);
pub const KEY_HENKAN: Capability = Capability::key(92);
pub const KEY_KATAKANAHIRAGANA: Capability = Capability::key(93);
pub const KEY_MUHENKAN: Capability = Capability::key(94);
pub const KEY_KPJPCOMMA: Capability = Capability::key(95);
pub const KEY_KPENTER: Capability = Capability::key(96);
pub const KEY_RIGHTCTRL: Capability = Capability::key(97);
pub const KEY_KPSLASH: Capability = Capability::key(98);
pub const KEY_SYSRQ: Capability = Capability::key(99);
pub const KEY_RIGHTALT: Capability = Capability::key(100);
pub const KEY_LINEFEED: Capability = Capability::key(101);
pub const KEY_HOME: Capability = Capability::key(102);
pub const KEY_UP: Capability = Capability::key(103);
pub const KEY_PAGEUP: Capability = Capability::key(104);
pub const KEY_LEFT: Capability = Capability::key(105);
pub const KEY_RIGHT: Capability = Capability::key(106);
pub const KEY_END: Capability = Capability::key(107);
pub const KEY_DOWN: Capability = Capability::key(108);
pub const KEY_PAGEDOWN: Capability = Capability::key(109);
pub const KEY_INSERT: Capability = Capability::key(110);
pub const KEY_DELETE: Capability = Capability::key(111);
pub const KEY_MACRO: Capability = Capability::key(112);
pub const KEY_MUTE: Capability = Capability::key(113);
pub const KEY_VOLUMEDOWN: Capability = Capability::key(114);
pub const KEY_VOLUMEUP: Capability = Capability::key(115);
pub const KEY_POWER: Capability = Capability::key(116);
pub const KEY_KPEQUAL: Capability = Capability::key(117);
pub const KEY_KPPLUSMINUS: Capability = Capability::key(118);
pub const KEY_PAUSE: Capability = Capability::key(119);
pub const KEY_SCALE: Capability = Capability::key(120);

pub const KEY_KPCOMMA: Capability = Capability::key(121);
pub const KEY_HANGEUL: Capability = Capability::key(122);
pub const KEY_HANGUEL: Capability = Capability::key(KEY_HANGEUL.code);
pub const KEY_HANJA: Capability = Capability::key(123);
pub const KEY_YEN: Capability = Capability::key(124);
pub const KEY_LEFTMETA: Capability = Capability::key(125);
pub const KEY_RIGHTMETA: Capability = Capability::key(126);
pub const KEY_COMPOSE: Capability = Capability::key(127);

pub const KEY_STOP: Capability = Capability::key(128);
pub const KEY_AGAIN: Capability = Capability::key(129);
pub const KEY_PROPS: Capability = Capability::key(130);
pub const KEY_UNDO: Capability = Capability::key(131);
pub const KEY_FRONT: Capability = Capability::key(132);
pub const KEY_COPY: Capability = Capability::key(133);
pub const KEY_OPEN: Capability = Capability::key(134);
pub const KEY_PASTE: Capability = Capability::key(135);
pub const KEY_FIND: Capability = Capability::key(136);
pub const KEY_CUT: Capability = Capability::key(137);
pub const KEY_HELP: Capability = Capability::key(138);
pub const KEY_MENU: Capability = Capability::key(139);
pub const KEY_CALC: Capability = Capability::key(140);
pub const KEY_SETUP: Capability = Capability::key(141);
pub const KEY_SLEEP: Capability = Capability::key(142);
pub const KEY_WAKEUP: Capability = Capability::key(143);
pub const KEY_FILE: Capability = Capability::key(144);
pub const KEY_SENDFILE: Capability = Capability::key(145);
pub const KEY_DELETEFILE: Capability = Capability::key(146);
pub const KEY_XFER: Capability = Capability::key(147);
pub const KEY_PROG1: Capability = Capability::key(148);
pub const KEY_PROG2: Capability = Capability::key(149);
pub const KEY_WWW: Capability = Capability::key(150);
pub const KEY_MSDOS: Capability = Capability::key(151);
pub const KEY_COFFEE: Capability = Capability::key(152);
pub const KEY_SCREENLOCK: Capability = Capability::key(KEY_COFFEE.code);
pub const KEY_ROTATE_DISPLAY: Capability = Capability::key(153);
pub const KEY_DIRECTION: Capability = Capability::key(KEY_ROTATE_DISPLAY.code);
pub const KEY_CYCLEWINDOWS: Capability = Capability::key(154);
pub const KEY_MAIL: Capability = Capability::key(155);
pub const KEY_BOOKMARKS: Capability = Capability::key(156);
pub const KEY_COMPUTER: Capability = Capability::key(157);
pub const KEY_BACK: Capability = Capability::key(158);
pub const KEY_FORWARD: Capability = Capability::key(159);
pub const KEY_CLOSECD: Capability = Capability::key(160);
pub const KEY_EJECTCD: Capability = Capability::key(161);
pub const KEY_EJECTCLOSECD: Capability = Capability::key(162);
pub const KEY_NEXTSONG: Capability = Capability::key(163);
pub const KEY_PLAYPAUSE: Capability = Capability::key(164);
pub const KEY_PREVIOUSSONG: Capability = Capability::key(165);
pub const KEY_STOPCD: Capability = Capability::key(166);
pub const KEY_RECORD: Capability = Capability::key(167);
pub const KEY_REWIND: Capability = Capability::key(168);
pub const KEY_PHONE: Capability = Capability::key(169);
pub const KEY_ISO: Capability = Capability::key(170);
pub const KEY_CONFIG: Capability = Capability::key(171);
pub const KEY_HOMEPAGE: Capability = Capability::key(172);
pub const KEY_REFRESH: Capability = Capability::key(173);
pub const KEY_EXIT: Capability = Capability::key(174);
pub const KEY_MOVE: Capability = Capability::key(175);
pub const KEY_EDIT: Capability = Capability::key(176);
pub const KEY_SCROLLUP: Capability = Capability::key(177);
pub const KEY_SCROLLDOWN: Capability = Capability::key(178);
pub const KEY_KPLEFTPAREN: Capability = Capability::key(179);
pub const KEY_KPRIGHTPAREN: Capability = Capability::key(180);
pub const KEY_NEW: Capability = Capability::key(181);
pub const KEY_REDO: Capability = Capability::key(182);

pub const KEY_F13: Capability = Capability::key(183);
pub const KEY_F14: Capability = Capability::key(184);
pub const KEY_F15: Capability = Capability::key(185);
pub const KEY_F16: Capability = Capability::key(186);
pub const KEY_F17: Capability = Capability::key(187);
pub const KEY_F18: Capability = Capability::key(188);
pub const KEY_F19: Capability = Capability::key(189);
pub const KEY_F20: Capability = Capability::key(190);
pub const KEY_F21: Capability = Capability::key(191);
pub const KEY_F22: Capability = Capability::key(192);
pub const KEY_F23: Capability = Capability::key(193);
pub const KEY_F24: Capability = Capability::key(194);

pub const KEY_PLAYCD: Capability = Capability::key(200);
pub const KEY_PAUSECD: Capability = Capability::key(201);
pub const KEY_PROG3: Capability = Capability::key(202);
pub const KEY_PROG4: Capability = Capability::key(203);
pub const KEY_DASHBOARD: Capability = Capability::key(204);
pub const KEY_SUSPEND: Capability = Capability::key(205);
pub const KEY_CLOSE: Capability = Capability::key(206);
pub const KEY_PLAY: Capability = Capability::key(207);
pub const KEY_FASTFORWARD: Capability = Capability::key(208);
pub const KEY_BASSBOOST: Capability = Capability::key(209);
pub const KEY_PRINT: Capability = Capability::key(210);
pub const KEY_HP: Capability = Capability::key(211);
pub const KEY_CAMERA: Capability = Capability::key(212);
pub const KEY_SOUND: Capability = Capability::key(213);
pub const KEY_QUESTION: Capability = Capability::key(214);
pub const KEY_EMAIL: Capability = Capability::key(215);
pub const KEY_CHAT: Capability = Capability::key(216);
pub const KEY_SEARCH: Capability = Capability::key(217);
pub const KEY_CONNECT: Capability = Capability::key(218);
pub const KEY_FINANCE: Capability = Capability::key(219);
pub const KEY_SPORT: Capability = Capability::key(220);
pub const KEY_SHOP: Capability = Capability::key(221);
pub const KEY_ALTERASE: Capability = Capability::key(222);
pub const KEY_CANCEL: Capability = Capability::key(223);
pub const KEY_BRIGHTNESSDOWN: Capability = Capability::key(224);
pub const KEY_BRIGHTNESSUP: Capability = Capability::key(225);
pub const KEY_MEDIA: Capability = Capability::key(226);

pub const KEY_SWITCHVIDEOMODE: Capability = Capability::key(227);
pub const KEY_KBDILLUMTOGGLE: Capability = Capability::key(228);
pub const KEY_KBDILLUMDOWN: Capability = Capability::key(229);
pub const KEY_KBDILLUMUP: Capability = Capability::key(230);

pub const KEY_SEND: Capability = Capability::key(231);
pub const KEY_REPLY: Capability = Capability::key(232);
pub const KEY_FORWARDMAIL: Capability = Capability::key(233);
pub const KEY_SAVE: Capability = Capability::key(234);
pub const KEY_DOCUMENTS: Capability = Capability::key(235);

pub const KEY_BATTERY: Capability = Capability::key(236);

pub const KEY_BLUETOOTH: Capability = Capability::key(237);
pub const KEY_WLAN: Capability = Capability::key(238);
pub const KEY_UWB: Capability = Capability::key(239);

pub const KEY_UNKNOWN: Capability = Capability::key(240);

pub const KEY_VIDEO_NEXT: Capability = Capability::key(241);
pub const KEY_VIDEO_PREV: Capability = Capability::key(242);
pub const KEY_BRIGHTNESS_CYCLE: Capability = Capability::key(243);
pub const KEY_BRIGHTNESS_AUTO: Capability = Capability::key(244);
pub const KEY_BRIGHTNESS_ZERO: Capability = Capability::key(KEY_BRIGHTNESS_AUTO.code);
pub const KEY_DISPLAY_OFF: Capability = Capability::key(245);

pub const KEY_WWAN: Capability = Capability::key(246);
pub const KEY_WIMAX: Capability = Capability::key(KEY_WWAN.code);
pub const KEY_RFKILL: Capability = Capability::key(247);

pub const KEY_MICMUTE: Capability = Capability::key(248);

// Code 255 is reserved for special needs of AT keyboard driver

pub const BTN_MISC: Capability = Capability::key(0x100);
pub const BTN_0: Capability = Capability::key(0x100);
pub const BTN_1: Capability = Capability::key(0x101);
pub const BTN_2: Capability = Capability::key(0x102);
pub const BTN_3: Capability = Capability::key(0x103);
pub const BTN_4: Capability = Capability::key(0x104);
pub const BTN_5: Capability = Capability::key(0x105);
pub const BTN_6: Capability = Capability::key(0x106);
pub const BTN_7: Capability = Capability::key(0x107);
pub const BTN_8: Capability = Capability::key(0x108);
pub const BTN_9: Capability = Capability::key(0x109);

pub const BTN_MOUSE: Capability = Capability::key(0x110);
pub const BTN_LEFT: Capability = Capability::key(0x110);
pub const BTN_RIGHT: Capability = Capability::key(0x111);
pub const BTN_MIDDLE: Capability = Capability::key(0x112);
pub const BTN_SIDE: Capability = Capability::key(0x113);
pub const BTN_EXTRA: Capability = Capability::key(0x114);
pub const BTN_FORWARD: Capability = Capability::key(0x115);
pub const BTN_BACK: Capability = Capability::key(0x116);
pub const BTN_TASK: Capability = Capability::key(0x117);

pub const BTN_JOYSTICK: Capability = Capability::key(0x120);
pub const BTN_TRIGGER: Capability = Capability::key(0x120);
pub const BTN_THUMB: Capability = Capability::key(0x121);
pub const BTN_THUMB2: Capability = Capability::key(0x122);
pub const BTN_TOP: Capability = Capability::key(0x123);
pub const BTN_TOP2: Capability = Capability::key(0x124);
pub const BTN_PINKIE: Capability = Capability::key(0x125);
pub const BTN_BASE: Capability = Capability::key(0x126);
pub const BTN_BASE2: Capability = Capability::key(0x127);
pub const BTN_BASE3: Capability = Capability::key(0x128);
pub const BTN_BASE4: Capability = Capability::key(0x129);
pub const BTN_BASE5: Capability = Capability::key(0x12a);
pub const BTN_BASE6: Capability = Capability::key(0x12b);
pub const BTN_DEAD: Capability = Capability::key(0x12f);

pub const BTN_GAMEPAD: Capability = Capability::key(0x130);
pub const BTN_SOUTH: Capability = Capability::key(0x130);
pub const BTN_A: Capability = Capability::key(BTN_SOUTH.code);
pub const BTN_EAST: Capability = Capability::key(0x131);
pub const BTN_B: Capability = Capability::key(BTN_EAST.code);
pub const BTN_C: Capability = Capability::key(0x132);
pub const BTN_NORTH: Capability = Capability::key(0x133);
pub const BTN_X: Capability = Capability::key(BTN_NORTH.code);
pub const BTN_WEST: Capability = Capability::key(0x134);
pub const BTN_Y: Capability = Capability::key(BTN_WEST.code);
pub const BTN_Z: Capability = Capability::key(0x135);
pub const BTN_TL: Capability = Capability::key(0x136);
pub const BTN_TR: Capability = Capability::key(0x137);
pub const BTN_TL2: Capability = Capability::key(0x138);
pub const BTN_TR2: Capability = Capability::key(0x139);
pub const BTN_SELECT: Capability = Capability::key(0x13a);
pub const BTN_START: Capability = Capability::key(0x13b);
pub const BTN_MODE: Capability = Capability::key(0x13c);
pub const BTN_THUMBL: Capability = Capability::key(0x13d);
pub const BTN_THUMBR: Capability = Capability::key(0x13e);

pub const BTN_DIGI: Capability = Capability::key(0x140);
pub const BTN_TOOL_PEN: Capability = Capability::key(0x140);
pub const BTN_TOOL_RUBBER: Capability = Capability::key(0x141);
pub const BTN_TOOL_BRUSH: Capability = Capability::key(0x142);
pub const BTN_TOOL_PENCIL: Capability = Capability::key(0x143);
pub const BTN_TOOL_AIRBRUSH: Capability = Capability::key(0x144);
pub const BTN_TOOL_FINGER: Capability = Capability::key(0x145);
pub const BTN_TOOL_MOUSE: Capability = Capability::key(0x146);
pub const BTN_TOOL_LENS: Capability = Capability::key(0x147);
pub const BTN_TOOL_QUINTTAP: Capability = Capability::key(0x148);
pub const BTN_STYLUS3: Capability = Capability::key(0x149);
pub const BTN_TOUCH: Capability = Capability::key(0x14a);
pub const BTN_STYLUS: Capability = Capability::key(0x14b);
pub const BTN_STYLUS2: Capability = Capability::key(0x14c);
pub const BTN_TOOL_DOUBLETAP: Capability = Capability::key(0x14d);
pub const BTN_TOOL_TRIPLETAP: Capability = Capability::key(0x14e);
pub const BTN_TOOL_QUADTAP: Capability = Capability::key(0x14f);

pub const BTN_WHEEL: Capability = Capability::key(0x150);
pub const BTN_GEAR_DOWN: Capability = Capability::key(0x150);
pub const BTN_GEAR_UP: Capability = Capability::key(0x151);

pub const KEY_OK: Capability = Capability::key(0x160);
pub const KEY_SELECT: Capability = Capability::key(0x161);
pub const KEY_GOTO: Capability = Capability::key(0x162);
pub const KEY_CLEAR: Capability = Capability::key(0x163);
pub const KEY_POWER2: Capability = Capability::key(0x164);
pub const KEY_OPTION: Capability = Capability::key(0x165);
pub const KEY_INFO: Capability = Capability::key(0x166);
pub const KEY_TIME: Capability = Capability::key(0x167);
pub const KEY_VENDOR: Capability = Capability::key(0x168);
pub const KEY_ARCHIVE: Capability = Capability::key(0x169);
pub const KEY_PROGRAM: Capability = Capability::key(0x16a);
pub const KEY_CHANNEL: Capability = Capability::key(0x16b);
pub const KEY_FAVORITES: Capability = Capability::key(0x16c);
pub const KEY_EPG: Capability = Capability::key(0x16d);
pub const KEY_PVR: Capability = Capability::key(0x16e);
pub const KEY_MHP: Capability = Capability::key(0x16f);
pub const KEY_LANGUAGE: Capability = Capability::key(0x170);
pub const KEY_TITLE: Capability = Capability::key(0x171);
pub const KEY_SUBTITLE: Capability = Capability::key(0x172);
pub const KEY_ANGLE: Capability = Capability::key(0x173);
pub const KEY_FULL_SCREEN: Capability = Capability::key(0x174);
pub const KEY_ZOOM: Capability = Capability::key(KEY_FULL_SCREEN.code);
pub const KEY_MODE: Capability = Capability::key(0x175);
pub const KEY_KEYBOARD: Capability = Capability::key(0x176);
pub const KEY_ASPECT_RATIO: Capability = Capability::key(0x177);
pub const KEY_SCREEN: Capability = Capability::key(KEY_ASPECT_RATIO.code);
pub const KEY_PC: Capability = Capability::key(0x178);
pub const KEY_TV: Capability = Capability::key(0x179);
pub const KEY_TV2: Capability = Capability::key(0x17a);
pub const KEY_VCR: Capability = Capability::key(0x17b);
pub const KEY_VCR2: Capability = Capability::key(0x17c);
pub const KEY_SAT: Capability = Capability::key(0x17d);
pub const KEY_SAT2: Capability = Capability::key(0x17e);
pub const KEY_CD: Capability = Capability::key(0x17f);
pub const KEY_TAPE: Capability = Capability::key(0x180);
pub const KEY_RADIO: Capability = Capability::key(0x181);
pub const KEY_TUNER: Capability = Capability::key(0x182);
pub const KEY_PLAYER: Capability = Capability::key(0x183);
pub const KEY_TEXT: Capability = Capability::key(0x184);
pub const KEY_DVD: Capability = Capability::key(0x185);
pub const KEY_AUX: Capability = Capability::key(0x186);
pub const KEY_MP3: Capability = Capability::key(0x187);
pub const KEY_AUDIO: Capability = Capability::key(0x188);
pub const KEY_VIDEO: Capability = Capability::key(0x189);
pub const KEY_DIRECTORY: Capability = Capability::key(0x18a);
pub const KEY_LIST: Capability = Capability::key(0x18b);
pub const KEY_MEMO: Capability = Capability::key(0x18c);
pub const KEY_CALENDAR: Capability = Capability::key(0x18d);
pub const KEY_RED: Capability = Capability::key(0x18e);
pub const KEY_GREEN: Capability = Capability::key(0x18f);
pub const KEY_YELLOW: Capability = Capability::key(0x190);
pub const KEY_BLUE: Capability = Capability::key(0x191);
pub const KEY_CHANNELUP: Capability = Capability::key(0x192);
pub const KEY_CHANNELDOWN: Capability = Capability::key(0x193);
pub const KEY_FIRST: Capability = Capability::key(0x194);
pub const KEY_LAST: Capability = Capability::key(0x195);
pub const KEY_AB: Capability = Capability::key(0x196);
pub const KEY_NEXT: Capability = Capability::key(0x197);
pub const KEY_RESTART: Capability = Capability::key(0x198);
pub const KEY_SLOW: Capability = Capability::key(0x199);
pub const KEY_SHUFFLE: Capability = Capability::key(0x19a);
pub const KEY_BREAK: Capability = Capability::key(0x19b);
pub const KEY_PREVIOUS: Capability = Capability::key(0x19c);
pub const KEY_DIGITS: Capability = Capability::key(0x19d);
pub const KEY_TEEN: Capability = Capability::key(0x19e);
pub const KEY_TWEN: Capability = Capability::key(0x19f);
pub const KEY_VIDEOPHONE: Capability = Capability::key(0x1a0);
pub const KEY_GAMES: Capability = Capability::key(0x1a1);
pub const KEY_ZOOMIN: Capability = Capability::key(0x1a2);
pub const KEY_ZOOMOUT: Capability = Capability::key(0x1a3);
pub const KEY_ZOOMRESET: Capability = Capability::key(0x1a4);
pub const KEY_WORDPROCESSOR: Capability = Capability::key(0x1a5);
pub const KEY_EDITOR: Capability = Capability::key(0x1a6);
pub const KEY_SPREADSHEET: Capability = Capability::key(0x1a7);
pub const KEY_GRAPHICSEDITOR: Capability = Capability::key(0x1a8);
pub const KEY_PRESENTATION: Capability = Capability::key(0x1a9);
pub const KEY_DATABASE: Capability = Capability::key(0x1aa);
pub const KEY_NEWS: Capability = Capability::key(0x1ab);
pub const KEY_VOICEMAIL: Capability = Capability::key(0x1ac);
pub const KEY_ADDRESSBOOK: Capability = Capability::key(0x1ad);
pub const KEY_MESSENGER: Capability = Capability::key(0x1ae);
pub const KEY_DISPLAYTOGGLE: Capability = Capability::key(0x1af);
pub const KEY_BRIGHTNESS_TOGGLE: Capability = Capability::key(KEY_DISPLAYTOGGLE.code);
pub const KEY_SPELLCHECK: Capability = Capability::key(0x1b0);
pub const KEY_LOGOFF: Capability = Capability::key(0x1b1);

pub const KEY_DOLLAR: Capability = Capability::key(0x1b2);
pub const KEY_EURO: Capability = Capability::key(0x1b3);

pub const KEY_FRAMEBACK: Capability = Capability::key(0x1b4);
pub const KEY_FRAMEFORWARD: Capability = Capability::key(0x1b5);
pub const KEY_CONTEXT_MENU: Capability = Capability::key(0x1b6);
pub const KEY_MEDIA_REPEAT: Capability = Capability::key(0x1b7);
pub const KEY_10CHANNELSUP: Capability = Capability::key(0x1b8);
pub const KEY_10CHANNELSDOWN: Capability = Capability::key(0x1b9);
pub const KEY_IMAGES: Capability = Capability::key(0x1ba);

pub const KEY_DEL_EOL: Capability = Capability::key(0x1c0);
pub const KEY_DEL_EOS: Capability = Capability::key(0x1c1);
pub const KEY_INS_LINE: Capability = Capability::key(0x1c2);
pub const KEY_DEL_LINE: Capability = Capability::key(0x1c3);

pub const KEY_FN: Capability = Capability::key(0x1d0);
pub const KEY_FN_ESC: Capability = Capability::key(0x1d1);
pub const KEY_FN_F1: Capability = Capability::key(0x1d2);
pub const KEY_FN_F2: Capability = Capability::key(0x1d3);
pub const KEY_FN_F3: Capability = Capability::key(0x1d4);
pub const KEY_FN_F4: Capability = Capability::key(0x1d5);
pub const KEY_FN_F5: Capability = Capability::key(0x1d6);
pub const KEY_FN_F6: Capability = Capability::key(0x1d7);
pub const KEY_FN_F7: Capability = Capability::key(0x1d8);
pub const KEY_FN_F8: Capability = Capability::key(0x1d9);
pub const KEY_FN_F9: Capability = Capability::key(0x1da);
pub const KEY_FN_F10: Capability = Capability::key(0x1db);
pub const KEY_FN_F11: Capability = Capability::key(0x1dc);
pub const KEY_FN_F12: Capability = Capability::key(0x1dd);
pub const KEY_FN_1: Capability = Capability::key(0x1de);
pub const KEY_FN_2: Capability = Capability::key(0x1df);
pub const KEY_FN_D: Capability = Capability::key(0x1e0);
pub const KEY_FN_E: Capability = Capability::key(0x1e1);
pub const KEY_FN_F: Capability = Capability::key(0x1e2);
pub const KEY_FN_S: Capability = Capability::key(0x1e3);
pub const KEY_FN_B: Capability = Capability::key(0x1e4);

pub const KEY_BRL_DOT1: Capability = Capability::key(0x1f1);
pub const KEY_BRL_DOT2: Capability = Capability::key(0x1f2);
pub const KEY_BRL_DOT3: Capability = Capability::key(0x1f3);
pub const KEY_BRL_DOT4: Capability = Capability::key(0x1f4);
pub const KEY_BRL_DOT5: Capability = Capability::key(0x1f5);
pub const KEY_BRL_DOT6: Capability = Capability::key(0x1f6);
pub const KEY_BRL_DOT7: Capability = Capability::key(0x1f7);
pub const KEY_BRL_DOT8: Capability = Capability::key(0x1f8);
pub const KEY_BRL_DOT9: Capability = Capability::key(0x1f9);
pub const KEY_BRL_DOT10: Capability = Capability::key(0x1fa);

pub const KEY_NUMERIC_0: Capability = Capability::key(0x200);
pub const KEY_NUMERIC_1: Capability = Capability::key(0x201);
pub const KEY_NUMERIC_2: Capability = Capability::key(0x202);
pub const KEY_NUMERIC_3: Capability = Capability::key(0x203);
pub const KEY_NUMERIC_4: Capability = Capability::key(0x204);
pub const KEY_NUMERIC_5: Capability = Capability::key(0x205);
pub const KEY_NUMERIC_6: Capability = Capability::key(0x206);
pub const KEY_NUMERIC_7: Capability = Capability::key(0x207);
pub const KEY_NUMERIC_8: Capability = Capability::key(0x208);
pub const KEY_NUMERIC_9: Capability = Capability::key(0x209);
pub const KEY_NUMERIC_STAR: Capability = Capability::key(0x20a);
pub const KEY_NUMERIC_POUND: Capability = Capability::key(0x20b);
pub const KEY_NUMERIC_A: Capability = Capability::key(0x20c);
pub const KEY_NUMERIC_B: Capability = Capability::key(0x20d);
pub const KEY_NUMERIC_C: Capability = Capability::key(0x20e);
pub const KEY_NUMERIC_D: Capability = Capability::key(0x20f);

pub const KEY_CAMERA_FOCUS: Capability = Capability::key(0x210);
pub const KEY_WPS_BUTTON: Capability = Capability::key(0x211);

pub const KEY_TOUCHPAD_TOGGLE: Capability = Capability::key(0x212);
pub const KEY_TOUCHPAD_ON: Capability = Capability::key(0x213);
pub const KEY_TOUCHPAD_OFF: Capability = Capability::key(0x214);

pub const KEY_CAMERA_ZOOMIN: Capability = Capability::key(0x215);
pub const KEY_CAMERA_ZOOMOUT: Capability = Capability::key(0x216);
pub const KEY_CAMERA_UP: Capability = Capability::key(0x217);
pub const KEY_CAMERA_DOWN: Capability = Capability::key(0x218);
pub const KEY_CAMERA_LEFT: Capability = Capability::key(0x219);
pub const KEY_CAMERA_RIGHT: Capability = Capability::key(0x21a);

pub const KEY_ATTENDANT_ON: Capability = Capability::key(0x21b);
pub const KEY_ATTENDANT_OFF: Capability = Capability::key(0x21c);
pub const KEY_ATTENDANT_TOGGLE: Capability = Capability::key(0x21d);
pub const KEY_LIGHTS_TOGGLE: Capability = Capability::key(0x21e);

pub const BTN_DPAD_UP: Capability = Capability::key(0x220);
pub const BTN_DPAD_DOWN: Capability = Capability::key(0x221);
pub const BTN_DPAD_LEFT: Capability = Capability::key(0x222);
pub const BTN_DPAD_RIGHT: Capability = Capability::key(0x223);

pub const KEY_ALS_TOGGLE: Capability = Capability::key(0x230);
pub const KEY_ROTATE_LOCK_TOGGLE: Capability = Capability::key(0x231);

pub const KEY_BUTTONCONFIG: Capability = Capability::key(0x240);
pub const KEY_TASKMANAGER: Capability = Capability::key(0x241);
pub const KEY_JOURNAL: Capability = Capability::key(0x242);
pub const KEY_CONTROLPANEL: Capability = Capability::key(0x243);
pub const KEY_APPSELECT: Capability = Capability::key(0x244);
pub const KEY_SCREENSAVER: Capability = Capability::key(0x245);
pub const KEY_VOICECOMMAND: Capability = Capability::key(0x246);
pub const KEY_ASSISTANT: Capability = Capability::key(0x247);
pub const KEY_KBD_LAYOUT_NEXT: Capability = Capability::key(0x248);

pub const KEY_BRIGHTNESS_MIN: Capability = Capability::key(0x250);

pub const KEY_KBDINPUTASSIST_PREV: Capability = Capability::key(0x260);
pub const KEY_KBDINPUTASSIST_NEXT: Capability = Capability::key(0x261);
pub const KEY_KBDINPUTASSIST_PREVGROUP: Capability = Capability::key(0x262);
pub const KEY_KBDINPUTASSIST_NEXTGROUP: Capability = Capability::key(0x263);
pub const KEY_KBDINPUTASSIST_ACCEPT: Capability = Capability::key(0x264);
pub const KEY_KBDINPUTASSIST_CANCEL: Capability = Capability::key(0x265);

// Diagonal movement keys
pub const KEY_RIGHT_UP: Capability = Capability::key(0x266);
pub const KEY_RIGHT_DOWN: Capability = Capability::key(0x267);
pub const KEY_LEFT_UP: Capability = Capability::key(0x268);
pub const KEY_LEFT_DOWN: Capability = Capability::key(0x269);

pub const KEY_ROOT_MENU: Capability = Capability::key(0x26a);
pub const KEY_MEDIA_TOP_MENU: Capability = Capability::key(0x26b);
pub const KEY_NUMERIC_11: Capability = Capability::key(0x26c);
pub const KEY_NUMERIC_12: Capability = Capability::key(0x26d);

pub const KEY_AUDIO_DESC: Capability = Capability::key(0x26e);
pub const KEY_3D_MODE: Capability = Capability::key(0x26f);
pub const KEY_NEXT_FAVORITE: Capability = Capability::key(0x270);
pub const KEY_STOP_RECORD: Capability = Capability::key(0x271);
pub const KEY_PAUSE_RECORD: Capability = Capability::key(0x272);
pub const KEY_VOD: Capability = Capability::key(0x273);
pub const KEY_UNMUTE: Capability = Capability::key(0x274);
pub const KEY_FASTREVERSE: Capability = Capability::key(0x275);
pub const KEY_SLOWREVERSE: Capability = Capability::key(0x276);

pub const KEY_DATA: Capability = Capability::key(0x277);
pub const KEY_ONSCREEN_KEYBOARD: Capability = Capability::key(0x278);
// Electronic privacy screen control
pub const KEY_PRIVACY_SCREEN_TOGGLE: Capability = Capability::key(0x279);

// Select an area of screen to be copied
pub const KEY_SELECTIVE_SCREENSHOT: Capability = Capability::key(0x27a);

pub const KEY_MACRO1: Capability = Capability::key(0x290);
pub const KEY_MACRO2: Capability = Capability::key(0x291);
pub const KEY_MACRO3: Capability = Capability::key(0x292);
pub const KEY_MACRO4: Capability = Capability::key(0x293);
pub const KEY_MACRO5: Capability = Capability::key(0x294);
pub const KEY_MACRO6: Capability = Capability::key(0x295);
pub const KEY_MACRO7: Capability = Capability::key(0x296);
pub const KEY_MACRO8: Capability = Capability::key(0x297);
pub const KEY_MACRO9: Capability = Capability::key(0x298);
pub const KEY_MACRO10: Capability = Capability::key(0x299);
pub const KEY_MACRO11: Capability = Capability::key(0x29a);
pub const KEY_MACRO12: Capability = Capability::key(0x29b);
pub const KEY_MACRO13: Capability = Capability::key(0x29c);
pub const KEY_MACRO14: Capability = Capability::key(0x29d);
pub const KEY_MACRO15: Capability = Capability::key(0x29e);
pub const KEY_MACRO16: Capability = Capability::key(0x29f);
pub const KEY_MACRO17: Capability = Capability::key(0x2a0);
pub const KEY_MACRO18: Capability = Capability::key(0x2a1);
pub const KEY_MACRO19: Capability = Capability::key(0x2a2);
pub const KEY_MACRO20: Capability = Capability::key(0x2a3);
pub const KEY_MACRO21: Capability = Capability::key(0x2a4);
pub const KEY_MACRO22: Capability = Capability::key(0x2a5);
pub const KEY_MACRO23: Capability = Capability::key(0x2a6);
pub const KEY_MACRO24: Capability = Capability::key(0x2a7);
pub const KEY_MACRO25: Capability = Capability::key(0x2a8);
pub const KEY_MACRO26: Capability = Capability::key(0x2a9);
pub const KEY_MACRO27: Capability = Capability::key(0x2aa);
pub const KEY_MACRO28: Capability = Capability::key(0x2ab);
pub const KEY_MACRO29: Capability = Capability::key(0x2ac);
pub const KEY_MACRO30: Capability = Capability::key(0x2ad);

pub const KEY_MACRO_RECORD_START: Capability = Capability::key(0x2b0);
pub const KEY_MACRO_RECORD_STOP: Capability = Capability::key(0x2b1);
pub const KEY_MACRO_PRESET_CYCLE: Capability = Capability::key(0x2b2);
pub const KEY_MACRO_PRESET1: Capability = Capability::key(0x2b3);
pub const KEY_MACRO_PRESET2: Capability = Capability::key(0x2b4);
pub const KEY_MACRO_PRESET3: Capability = Capability::key(0x2b5);

pub const KEY_KBD_LCD_MENU1: Capability = Capability::key(0x2b8);
pub const KEY_KBD_LCD_MENU2: Capability = Capability::key(0x2b9);
pub const KEY_KBD_LCD_MENU3: Capability = Capability::key(0x2ba);
pub const KEY_KBD_LCD_MENU4: Capability = Capability::key(0x2bb);
pub const KEY_KBD_LCD_MENU5: Capability = Capability::key(0x2bc);

pub const BTN_TRIGGER_HAPPY: Capability = Capability::key(0x2c0);
pub const BTN_TRIGGER_HAPPY1: Capability = Capability::key(0x2c0);
pub const BTN_TRIGGER_HAPPY2: Capability = Capability::key(0x2c1);
pub const BTN_TRIGGER_HAPPY3: Capability = Capability::key(0x2c2);
pub const BTN_TRIGGER_HAPPY4: Capability = Capability::key(0x2c3);
pub const BTN_TRIGGER_HAPPY5: Capability = Capability::key(0x2c4);
pub const BTN_TRIGGER_HAPPY6: Capability = Capability::key(0x2c5);
pub const BTN_TRIGGER_HAPPY7: Capability = Capability::key(0x2c6);
pub const BTN_TRIGGER_HAPPY8: Capability = Capability::key(0x2c7);
pub const BTN_TRIGGER_HAPPY9: Capability = Capability::key(0x2c8);
pub const BTN_TRIGGER_HAPPY10: Capability = Capability::key(0x2c9);
pub const BTN_TRIGGER_HAPPY11: Capability = Capability::key(0x2ca);
pub const BTN_TRIGGER_HAPPY12: Capability = Capability::key(0x2cb);
pub const BTN_TRIGGER_HAPPY13: Capability = Capability::key(0x2cc);
pub const BTN_TRIGGER_HAPPY14: Capability = Capability::key(0x2cd);
pub const BTN_TRIGGER_HAPPY15: Capability = Capability::key(0x2ce);
pub const BTN_TRIGGER_HAPPY16: Capability = Capability::key(0x2cf);
pub const BTN_TRIGGER_HAPPY17: Capability = Capability::key(0x2d0);
pub const BTN_TRIGGER_HAPPY18: Capability = Capability::key(0x2d1);
pub const BTN_TRIGGER_HAPPY19: Capability = Capability::key(0x2d2);
pub const BTN_TRIGGER_HAPPY20: Capability = Capability::key(0x2d3);
pub const BTN_TRIGGER_HAPPY21: Capability = Capability::key(0x2d4);
pub const BTN_TRIGGER_HAPPY22: Capability = Capability::key(0x2d5);
pub const BTN_TRIGGER_HAPPY23: Capability = Capability::key(0x2d6);
pub const BTN_TRIGGER_HAPPY24: Capability = Capability::key(0x2d7);
pub const BTN_TRIGGER_HAPPY25: Capability = Capability::key(0x2d8);
pub const BTN_TRIGGER_HAPPY26: Capability = Capability::key(0x2d9);
pub const BTN_TRIGGER_HAPPY27: Capability = Capability::key(0x2da);
pub const BTN_TRIGGER_HAPPY28: Capability = Capability::key(0x2db);
pub const BTN_TRIGGER_HAPPY29: Capability = Capability::key(0x2dc);
pub const BTN_TRIGGER_HAPPY30: Capability = Capability::key(0x2dd);
pub const BTN_TRIGGER_HAPPY31: Capability = Capability::key(0x2de);
pub const BTN_TRIGGER_HAPPY32: Capability = Capability::key(0x2df);
pub const BTN_TRIGGER_HAPPY33: Capability = Capability::key(0x2e0);
pub const BTN_TRIGGER_HAPPY34: Capability = Capability::key(0x2e1);
pub const BTN_TRIGGER_HAPPY35: Capability = Capability::key(0x2e2);
pub const BTN_TRIGGER_HAPPY36: Capability = Capability::key(0x2e3);
pub const BTN_TRIGGER_HAPPY37: Capability = Capability::key(0x2e4);
pub const BTN_TRIGGER_HAPPY38: Capability = Capability::key(0x2e5);
pub const BTN_TRIGGER_HAPPY39: Capability = Capability::key(0x2e6);
pub const BTN_TRIGGER_HAPPY40: Capability = Capability::key(0x2e7);

pub const KEY_MIN_INTERESTING: Capability = Capability::key(KEY_MUTE.code);

// Relative axes

pub const REL_X: Capability = Capability::new(EventType::Relative, 0x00);
pub const REL_Y: Capability = Capability::new(EventType::Relative, 0x01);
pub const REL_Z: Capability = Capability::new(EventType::Relative, 0x02);
pub const REL_RX: Capability = Capability::new(EventType::Relative, 0x03);
pub const REL_RY: Capability = Capability::new(EventType::Relative, 0x04);
pub const REL_RZ: Capability = Capability::new(EventType::Relative, 0x05);
pub const REL_HWHEEL: Capability = Capability::new(EventType::Relative, 0x06);
pub const REL_DIAL: Capability = Capability::new(EventType::Relative, 0x07);
pub const REL_WHEEL: Capability = Capability::new(EventType::Relative, 0x08);
pub const REL_MISC: Capability = Capability::new(EventType::Relative, 0x09);
pub const REL_RESERVED: Capability = Capability::new(EventType::Relative, 0x0a);
pub const REL_WHEEL_HI_RES: Capability = Capability::new(EventType::Relative, 0x0b);
pub const REL_HWHEEL_HI_RES: Capability = Capability::new(EventType::Relative, 0x0c);

// Absolute axes

pub const ABS_X: Capability = Capability::new(EventType::Absolute, 0x00);
pub const ABS_Y: Capability = Capability::new(EventType::Absolute, 0x01);
pub const ABS_Z: Capability = Capability::new(EventType::Absolute, 0x02);
pub const ABS_RX: Capability = Capability::new(EventType::Absolute, 0x03);
pub const ABS_RY: Capability = Capability::new(EventType::Absolute, 0x04);
pub const ABS_RZ: Capability = Capability::new(EventType::Absolute, 0x05);
pub const ABS_THROTTLE: Capability = Capability::new(EventType::Absolute, 0x06);
pub const ABS_RUDDER: Capability = Capability::new(EventType::Absolute, 0x07);
pub const ABS_WHEEL: Capability = Capability::new(EventType::Absolute, 0x08);
pub const ABS_GAS: Capability = Capability::new(EventType::Absolute, 0x09);
pub const ABS_BRAKE: Capability = Capability::new(EventType::Absolute, 0x0a);
pub const ABS_HAT0X: Capability = Capability::new(EventType::Absolute, 0x10);
pub const ABS_HAT0Y: Capability = Capability::new(EventType::Absolute, 0x11);
pub const ABS_HAT1X: Capability = Capability::new(EventType::Absolute, 0x12);
pub const ABS_HAT1Y: Capability = Capability::new(EventType::Absolute, 0x13);
pub const ABS_HAT2X: Capability = Capability::new(EventType::Absolute, 0x14);
pub const ABS_HAT2Y: Capability = Capability::new(EventType::Absolute, 0x15);
pub const ABS_HAT3X: Capability = Capability::new(EventType::Absolute, 0x16);
pub const ABS_HAT3Y: Capability = Capability::new(EventType::Absolute, 0x17);
pub const ABS_PRESSURE: Capability = Capability::new(EventType::Absolute, 0x18);
pub const ABS_DISTANCE: Capability = Capability::new(EventType::Absolute, 0x19);
pub const ABS_TILT_X: Capability = Capability::new(EventType::Absolute, 0x1a);
pub const ABS_TILT_Y: Capability = Capability::new(EventType::Absolute, 0x1b);
pub const ABS_TOOL_WIDTH: Capability = Capability::new(EventType::Absolute, 0x1c);

pub const ABS_VOLUME: Capability = Capability::new(EventType::Absolute, 0x20);

pub const ABS_MISC: Capability = Capability::new(EventType::Absolute, 0x28);

pub const ABS_RESERVED: Capability = Capability::new(EventType::Absolute, 0x2e);

pub const ABS_MT_SLOT: Capability = Capability::new(EventType::Absolute, 0x2f);
pub const ABS_MT_TOUCH_MAJOR: Capability = Capability::new(EventType::Absolute, 0x30);
pub const ABS_MT_TOUCH_MINOR: Capability = Capability::new(EventType::Absolute, 0x31);
pub const ABS_MT_WIDTH_MAJOR: Capability = Capability::new(EventType::Absolute, 0x32);
pub const ABS_MT_WIDTH_MINOR: Capability = Capability::new(EventType::Absolute, 0x33);
pub const ABS_MT_ORIENTATION: Capability = Capability::new(EventType::Absolute, 0x34);
pub const ABS_MT_POSITION_X: Capability = Capability::new(EventType::Absolute, 0x35);
pub const ABS_MT_POSITION_Y: Capability = Capability::new(EventType::Absolute, 0x36);
pub const ABS_MT_TOOL_TYPE: Capability = Capability::new(EventType::Absolute, 0x37);
pub const ABS_MT_BLOB_ID: Capability = Capability::new(EventType::Absolute, 0x38);
pub const ABS_MT_TRACKING_ID: Capability = Capability::new(EventType::Absolute, 0x39);
pub const ABS_MT_PRESSURE: Capability = Capability::new(EventType::Absolute, 0x3a);
pub const ABS_MT_DISTANCE: Capability = Capability::new(EventType::Absolute, 0x3b);
pub const ABS_MT_TOOL_X: Capability = Capability::new(EventType::Absolute, 0x3c);
pub const ABS_MT_TOOL_Y: Capability = Capability::new(EventType::Absolute, 0x3d);

// Switch events

pub const SW_LID: Capability = Capability::new(EventType::Switch, 0x00);
pub const SW_TABLET_MODE: Capability = Capability::new(EventType::Switch, 0x01);
pub const SW_HEADPHONE_INSERT: Capability = Capability::new(EventType::Switch, 0x02);
pub const SW_RFKILL_ALL: Capability = Capability::new(EventType::Switch, 0x03);
pub const SW_RADIO: Capability = Capability::new(EventType::Switch, SW_RFKILL_ALL.code);
pub const SW_MICROPHONE_INSERT: Capability = Capability::new(EventType::Switch, 0x04);
pub const SW_DOCK: Capability = Capability::new(EventType::Switch, 0x05);
pub const SW_LINEOUT_INSERT: Capability = Capability::new(EventType::Switch, 0x06);
pub const SW_JACK_PHYSICAL_INSERT: Capability = Capability::new(EventType::Switch, 0x07);
pub const SW_VIDEOOUT_INSERT: Capability = Capability::new(EventType::Switch, 0x08);
pub const SW_CAMERA_LENS_COVER: Capability = Capability::new(EventType::Switch, 0x09);
pub const SW_KEYPAD_SLIDE: Capability = Capability::new(EventType::Switch, 0x0a);
pub const SW_FRONT_PROXIMITY: Capability = Capability::new(EventType::Switch, 0x0b);
pub const SW_ROTATE_LOCK: Capability = Capability::new(EventType::Switch, 0x0c);
pub const SW_LINEIN_INSERT: Capability = Capability::new(EventType::Switch, 0x0d);
pub const SW_MUTE_DEVICE: Capability = Capability::new(EventType::Switch, 0x0e);
pub const SW_PEN_INSERTED: Capability = Capability::new(EventType::Switch, 0x0f);
pub const SW_MACHINE_COVER: Capability = Capability::new(EventType::Switch, 0x10);

// Misc

pub const MSC_SERIAL: Capability = Capability::new(EventType::Misc, 0x00);
pub const MSC_PULSELED: Capability = Capability::new(EventType::Misc, 0x01);
pub const MSC_GESTURE: Capability = Capability::new(EventType::Misc, 0x02);
pub const MSC_RAW: Capability = Capability::new(EventType::Misc, 0x03);
pub const MSC_SCAN: Capability = Capability::new(EventType::Misc, 0x04);
pub const MSC_TIMESTAMP: Capability = Capability::new(EventType::Misc, 0x05);

// LEDs

pub const LED_NUML: Capability = Capability::new(EventType::Led, 0x00);
pub const LED_CAPSL: Capability = Capability::new(EventType::Led, 0x01);
pub const LED_SCROLLL: Capability = Capability::new(EventType::Led, 0x02);
pub const LED_COMPOSE: Capability = Capability::new(EventType::Led, 0x03);
pub const LED_KANA: Capability = Capability::new(EventType::Led, 0x04);
pub const LED_SLEEP: Capability = Capability::new(EventType::Led, 0x05);
pub const LED_SUSPEND: Capability = Capability::new(EventType::Led, 0x06);
pub const LED_MUTE: Capability = Capability::new(EventType::Led, 0x07);
pub const LED_MISC: Capability = Capability::new(EventType::Led, 0x08);
pub const LED_MAIL: Capability = Capability::new(EventType::Led, 0x09);
pub const LED_CHARGING: Capability = Capability::new(EventType::Led, 0x0a);

// Autorepeat values

pub const REP_DELAY: Capability = Capability::new(EventType::Repeat, 0x00);
pub const REP_PERIOD: Capability = Capability::new(EventType::Repeat, 0x01);

// Sounds

pub const SND_CLICK: Capability = Capability::new(EventType::Sound, 0x00);
pub const SND_BELL: Capability = Capability::new(EventType::Sound, 0x01);
pub const SND_TONE: Capability = Capability::new(EventType::Sound, 0x02);
