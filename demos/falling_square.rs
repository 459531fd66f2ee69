//! Falling square demo
//!
//! A spinning square is thrown to the right, lands on a fixed triangle and
//! slides off toward a second, bouncy triangle. The edge involved in the
//! latest collision is highlighted in green.
//!
//! Controls:
//! - SPACE: Kick the square upward
//! - R: Reset the scene
//! - ESC: Exit

use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::text::Text;
use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics_core::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use embedded_polyphys::draw::draw;
use embedded_polyphys::render::render;
use embedded_polyphys::{
    Collider, Contact, Material, MovableBody, MovableId, Simulation, SimulationConfig, StaticBody,
    Vec2,
};
use std::thread;
use std::time::Instant;

fn spawn_square() -> MovableBody {
    MovableBody::new(Collider::rect(40.0, 40.0).unwrap(), 1.0)
        .unwrap()
        .with_position(Vec2::new(0.0, 200.0))
        .with_velocity(Vec2::new(10.0, 0.0))
        .with_angular_velocity(0.005)
        .with_material(Material::bouncy(1.0))
}

fn build_scene(config: &SimulationConfig) -> (Simulation<4, 8>, MovableId) {
    let mut sim = Simulation::<4, 8>::new(config.clone()).unwrap();
    let square = sim.add_movable(spawn_square()).unwrap();

    let triangle = Collider::from_points(&[[100.0, 0.0], [0.0, 100.0], [100.0, 100.0]]).unwrap();
    sim.add_static(
        StaticBody::new(triangle.clone())
            .with_position(Vec2::new(150.0, 200.0))
            .with_material(Material::bouncy(0.0)),
    )
    .unwrap();
    sim.add_static(
        StaticBody::new(triangle)
            .with_rotation(std::f64::consts::FRAC_PI_4)
            .with_position(Vec2::new(300.0, 100.0))
            .with_material(Material::bouncy(0.8)),
    )
    .unwrap();

    (sim, square)
}

fn main() {
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(640, 480));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Falling Square - SPACE=kick R=reset ESC=exit", &output_settings);

    let config = SimulationConfig::new(60, Vec2::new(0.0, 0.098), 0.0);
    let (mut sim, mut square) = build_scene(&config);
    let mut last_contact: Option<Contact> = None;

    let text_style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);

    println!("Falling Square Demo");
    println!("SPACE = kick the square upward");
    println!("R = reset");
    println!("ESC = exit");

    display.clear(Rgb565::BLACK).unwrap();
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Escape => break 'running,
                    Keycode::Space => {
                        if let Some(body) = sim.movable_mut(square) {
                            body.apply_impulse(Vec2::new(0.0, -4.0));
                        }
                    }
                    Keycode::R => {
                        (sim, square) = build_scene(&config);
                        last_contact = None;
                    }
                    _ => {}
                },
                SimulatorEvent::Quit => break 'running,
                _ => {}
            }
        }

        let report = sim.tick();
        if report.contact.is_some() {
            last_contact = report.contact;
        }

        display.clear(Rgb565::BLACK).unwrap();
        render(&sim, last_contact.as_ref(), |prim| {
            draw(prim, &mut display).unwrap();
        });

        // HUD
        let hud = format!(
            "tick {}  hits {}/{}",
            sim.ticks_elapsed(),
            report.movable_hits,
            report.static_hits
        );
        Text::new(&hud, Point::new(10, 15), text_style)
            .draw(&mut display)
            .unwrap();

        window.update(&display);
        thread::sleep(config.frame_delay(frame_start.elapsed()));
    }
}
