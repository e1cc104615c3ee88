use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::configuration::config::ViewConfig;
use crate::simulation::session::{Frame, InputEvent, SimulationSession};
use crate::simulation::states::Rgb;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct StarIndex(pub usize);

#[derive(Component)]
struct DateText;

/// Window size, to map top-left pixel coordinates onto Bevy's centred world
#[derive(Resource, Clone, Copy)]
struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    fn world(&self, (px, py): (f64, f64)) -> Vec2 {
        Vec2::new(px as f32 - self.width / 2.0, self.height / 2.0 - py as f32)
    }
}

const DATE_FONT_SIZE: f32 = 25.0;
const DATE_MARGIN: f32 = 10.0;

pub fn run_2d(session: SimulationSession, view: &ViewConfig) {
    let viewport = Viewport {
        width: view.width,
        height: view.height,
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System Simulation".into(),
                resolution: WindowResolution::new(view.width, view.height),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // one simulated step per frame at the configured rate
        .insert_resource(Time::<Fixed>::from_hz(view.frame_rate.max(1) as f64))
        .insert_resource(session)
        .insert_resource(viewport)
        .add_systems(Startup, setup_scene_system)
        .add_systems(Update, (keyboard_input_system, sync_transforms_system, date_text_system, orbit_gizmo_system).chain())
        .add_systems(FixedUpdate, physics_step_system)
        .run();
}

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

fn setup_scene_system(mut commands: Commands, session: Res<SimulationSession>, viewport: Res<Viewport>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!("starting 2D viewer with {} bodies", session.system.len());

    commands.spawn(Camera2dBundle::default());

    // Unit circle, scaled per entity to its pixel radius
    let circle = Mesh2dHandle(meshes.add(Circle::new(1.0)));
    let frame = session.frame();

    for (i, star) in frame.stars.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.clone(),
                material: materials.add(ColorMaterial::from(to_color(star.color))),
                transform: Transform::from_translation(viewport.world(star.position).extend(0.0))
                    .with_scale(Vec3::splat(star.radius as f32)),
                ..Default::default()
            },
            StarIndex(i),
        ));
    }

    for (i, body) in frame.bodies.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.clone(),
                material: materials.add(ColorMaterial::from(to_color(body.color))),
                transform: Transform::from_translation(viewport.world(body.position).extend(1.0))
                    .with_scale(Vec3::splat(body.radius as f32)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    commands.spawn((
        Text2dBundle {
            text: Text::from_section(
                frame.date_label,
                TextStyle {
                    font_size: DATE_FONT_SIZE,
                    color: Color::WHITE,
                    ..default()
                },
            ),
            text_anchor: Anchor::TopLeft,
            transform: Transform::from_xyz(
                -viewport.width / 2.0 + DATE_MARGIN,
                viewport.height / 2.0 - DATE_MARGIN,
                2.0,
            ),
            ..default()
        },
        DateText,
    ));
}

/// Map pressed keys onto session input events
fn poll_keys(keys: &ButtonInput<KeyCode>) -> Vec<InputEvent> {
    let bindings = [
        (KeyCode::Space, InputEvent::TogglePause),
        (KeyCode::KeyI, InputEvent::ZoomIn),
        (KeyCode::KeyO, InputEvent::ZoomOut),
        (KeyCode::Escape, InputEvent::Quit),
        (KeyCode::KeyQ, InputEvent::Quit),
    ];
    bindings
        .into_iter()
        .filter(|(key, _)| keys.just_pressed(*key))
        .map(|(_, event)| event)
        .collect()
}

fn keyboard_input_system(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<SimulationSession>, mut exit: EventWriter<AppExit>) {
    for event in poll_keys(&keys) {
        session.handle(event);
    }
    if !session.is_running() {
        exit.send(AppExit::Success);
    }
}

fn physics_step_system(mut session: ResMut<SimulationSession>, mut exit: EventWriter<AppExit>) {
    if !session.is_running() {
        return;
    }
    if let Err(err) = session.step() {
        error!("stopping simulation on {}: {}", session.clock.label(), err);
        exit.send(AppExit::error());
    }
}

fn sync_transforms_system(
    session: Res<SimulationSession>,
    viewport: Res<Viewport>,
    mut bodies: Query<(&BodyIndex, &mut Transform), Without<StarIndex>>,
    mut stars: Query<(&StarIndex, &mut Transform), Without<BodyIndex>>,
) {
    let frame = session.frame();

    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(item) = frame.bodies.get(*i) {
            let p = viewport.world(item.position);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
            transform.scale = Vec3::splat(item.radius as f32);
        }
    }

    for (StarIndex(i), mut transform) in &mut stars {
        if let Some(item) = frame.stars.get(*i) {
            let p = viewport.world(item.position);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

fn date_text_system(session: Res<SimulationSession>, mut query: Query<&mut Text, With<DateText>>) {
    let label = session.clock.label();
    for mut text in &mut query {
        if let Some(section) = text.sections.first_mut() {
            if section.value != label {
                section.value.clone_from(&label);
            }
        }
    }
}

fn orbit_gizmo_system(session: Res<SimulationSession>, viewport: Res<Viewport>, mut gizmos: Gizmos) {
    if !session.view.draw_orbits {
        return;
    }
    let Frame { orbits, .. } = session.frame();
    for path in orbits.into_iter().filter(|p| p.len() > 2) {
        gizmos.linestrip_2d(path.into_iter().map(|p| viewport.world(p)), Color::WHITE);
    }
}
