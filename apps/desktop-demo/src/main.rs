use deduct_app_shell::AppShell;
use deduct_editor::{Connective, ParseRuleError, RuleKind, SeedRule};
use deduct_foundation::PointerEventKind;
use deduct_platform_desktop_winit::DesktopWinitPlatform;
use deduct_render_pixels::FrameSurface;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const INITIAL_WIDTH: u32 = 800;
const INITIAL_HEIGHT: u32 = 600;

/// Seed rules come from the command line as `<kind>-<connective>@<x>,<y>`
/// arguments; with none given a single ∧-introduction block is placed.
fn seed_rules() -> Result<Vec<SeedRule>, ParseRuleError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Ok(vec![SeedRule::new(
            100.0,
            100.0,
            RuleKind::Introduction,
            Connective::And,
        )]);
    }
    args.iter().map(|arg| arg.parse()).collect()
}

fn main() {
    env_logger::init();

    let seeds = match seed_rules() {
        Ok(seeds) => seeds,
        Err(err) => {
            log::error!("invalid seed rule: {err}");
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Deduct")
        .with_inner_size(LogicalSize::new(
            INITIAL_WIDTH as f64,
            INITIAL_HEIGHT as f64,
        ))
        .build(&event_loop)
        .expect("window");
    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(INITIAL_WIDTH, INITIAL_HEIGHT, surface_texture).expect("pixels");

    let mut shell = AppShell::new(&seeds);
    let mut platform = DesktopWinitPlatform::default();
    let mut cursor = PhysicalPosition::new(0.0, 0.0);
    shell.set_viewport(size.width as f32, size.height as f32);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                        log::error!("failed to resize buffer: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    shell.set_buffer_size(new_size.width, new_size.height);
                    shell.set_viewport(new_size.width as f32, new_size.height as f32);
                }
                WindowEvent::ScaleFactorChanged {
                    scale_factor,
                    new_inner_size,
                    ..
                } => {
                    platform.set_scale_factor(scale_factor);
                    if let Err(err) =
                        pixels.resize_surface(new_inner_size.width, new_inner_size.height)
                    {
                        log::error!("failed to resize surface: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if let Err(err) =
                        pixels.resize_buffer(new_inner_size.width, new_inner_size.height)
                    {
                        log::error!("failed to resize buffer: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    shell.set_buffer_size(new_inner_size.width, new_inner_size.height);
                    shell.set_viewport(new_inner_size.width as f32, new_inner_size.height as f32);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = position;
                    shell.dispatch(platform.pointer_event(PointerEventKind::Move, cursor));
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => {
                    let kind = match state {
                        ElementState::Pressed => PointerEventKind::Down,
                        ElementState::Released => PointerEventKind::Up,
                    };
                    shell.dispatch(platform.pointer_event(kind, cursor));
                }
                WindowEvent::Touch(touch) => {
                    if let Some(event) =
                        platform.touch_event(touch.phase, touch.id, touch.location)
                    {
                        shell.dispatch(event);
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let (width, height) = shell.buffer_size();
                let mut surface = FrameSurface::new(pixels.frame_mut(), width, height);
                shell.frame(&mut surface);
                if let Err(err) = pixels.render() {
                    log::error!("pixels render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
