use macroquad::prelude::*;
use rgb::rgb::cart::Cart;
use rgb::rgb::cpu::Cpu;

const CYCLES_PER_FRAME: u32 = 70224; // one Game Boy frame at 4.194304 MHz / 59.7 Hz

struct GameBoyEmulator {
    cpu: Cpu,
}

impl GameBoyEmulator {
    fn new(rom_path: &str) -> Self {
        let cart = Cart::new(std::path::Path::new(rom_path));
        let mut cpu = Cpu::new();
        cpu.load_program(cart.bytes());
        Self { cpu }
    }

    fn run_frame(&mut self) {
        match self.cpu.run_for_cycles(CYCLES_PER_FRAME) {
            Ok(_) => {}
            Err(e) => log::error!("{}", e),
        }
    }
}

#[macroquad::main("Game Boy Emulator")]
async fn main() {
    #[cfg(debug_assertions)]
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut rom_path = "./test-roms/pkmn.gb".to_string();
    let mut debug = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rom-file" => {
                i += 1;
                rom_path = args
                    .get(i)
                    .unwrap_or_else(|| panic!("--rom-file requires a path argument"))
                    .clone();
                i += 1;
            }
            "--debug" => {
                debug = true;
                i += 1;
            }
            "--help" | "-h" => {
                println!("Game Boy Emulator");
                println!("Usage: {} [options] [rom_path]", args[0]);
                println!();
                println!("Options:");
                println!("  --rom-file <path>  Path to the ROM file to load");
                println!("  --debug            Enable debug-mode diagnostics (idle-loop detection, verbose logging)");
                println!("  --help, -h         Show this help message");
                println!();
                println!("If no ROM path is provided, defaults to './test-roms/pkmn.gb'");
                return;
            }
            arg if !arg.starts_with("--") => {
                rom_path = arg.to_string();
                i += 1;
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                return;
            }
        }
    }

    if debug {
        log::info!("debug mode enabled");
    }

    let mut emulator = GameBoyEmulator::new(&rom_path);

    loop {
        clear_background(GRAY);

        emulator.run_frame();

        let snapshot = emulator.cpu.state();
        draw_text(
            format!("PC:{:04X} SP:{:04X} A:{:02X} F:{:02X} IME:{}", snapshot.pc, snapshot.sp, snapshot.a, snapshot.f, snapshot.ime),
            10.0,
            20.0,
            20.0,
            WHITE,
        );
        draw_text("Game Boy Emulator", 10.0, screen_height() - 20.0, 20.0, WHITE);

        next_frame().await
    }
}
