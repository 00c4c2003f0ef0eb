use pewinput::codes::*;
use pewinput::*;
use std::thread::sleep;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut keyboard = ProfileBuilder::numbered(templates::DEFAULT_DEVICE_NAME)
        .capabilities([
            KEY_LEFTSHIFT,
            KEY_SPACE,
            KEY_H,
            KEY_E,
            KEY_L,
            KEY_O,
            KEY_W,
            KEY_R,
            KEY_D,
            KEY_1,
            KEY_COMMA,
        ])
        .build()
        .create_controller()?;
    let mut mouse = DeviceTemplates::mouse().create_controller()?;

    // Type "Hello, World!"
    keyboard.click_combination(&[KEY_LEFTSHIFT, KEY_H])?;
    for key in [KEY_E, KEY_L, KEY_L, KEY_O, KEY_COMMA, KEY_SPACE] {
        keyboard.click(key)?;
    }

    keyboard.click_combination(&[KEY_LEFTSHIFT, KEY_W])?;
    for key in [KEY_O, KEY_R, KEY_L, KEY_D] {
        // Or build the frame by hand
        let mut frame = keyboard.frame();
        frame.press(key).release(key);
        frame.commit()?;
    }

    keyboard.click_combination(&[KEY_LEFTSHIFT, KEY_1])?;

    // Move the pointer towards the bottom right
    for _ in 0..20 {
        mouse.move_relative(5, 5)?;
        sleep(Duration::from_millis(20));
    }

    for _ in 0..20 {
        mouse.move_wheel(1)?;
        sleep(Duration::from_millis(20));
    }

    println!();

    keyboard.close()?;
    mouse.close()?;

    Ok(())
}
