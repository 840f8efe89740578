//! Multi-instruction scenarios driven through the public API only.
use okto::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MEM_START};
use okto::prelude::*;

fn boot(program: &[u8]) -> Machine {
    let mut machine = Machine::new(MachineConf::default());
    machine.reset(program).unwrap();
    machine
}

#[test]
fn load_then_add() {
    // LD V0, 05 / ADD V0, 03
    let mut machine = boot(&[0x60, 0x05, 0x70, 0x03]);

    machine.step().unwrap();
    machine.step().unwrap();

    assert_eq!(machine.register(0), 8);
    assert_eq!(machine.pc(), 0x204);
}

#[test]
fn draw_sprite_row() {
    // LD I, 210 / DRW V0, V0, 1, with one sprite row 0xF0 at 0x210.
    let mut program = vec![0xA2, 0x10, 0xD0, 0x01];
    program.resize(0x10, 0x00);
    program.push(0xF0);

    let mut machine = boot(&program);
    machine.step().unwrap();
    assert_eq!(machine.index(), 0x210);
    assert_eq!(machine.step().unwrap(), Flow::Draw);

    for x in 0..4 {
        assert!(machine.read_pixel(x, 0), "pixel ({x}, 0) should be lit");
    }
    for x in 4..DISPLAY_WIDTH {
        assert!(!machine.read_pixel(x, 0), "pixel ({x}, 0) should be clear");
    }
    assert_eq!(machine.register(0xF), 0);
}

#[test]
fn clear_screen_blanks_every_pixel() {
    // Draw a row, then CLS.
    let mut program = vec![0xA2, 0x10, 0xD0, 0x01, 0x00, 0xE0];
    program.resize(0x10, 0x00);
    program.push(0xFF);

    let mut machine = boot(&program);
    machine.step().unwrap();
    machine.step().unwrap();
    machine.step().unwrap();

    for y in 0..DISPLAY_HEIGHT {
        for x in 0..DISPLAY_WIDTH {
            assert!(!machine.read_pixel(x, y));
        }
    }
}

#[test]
fn call_return_round_trip() {
    // 0x200: CALL 204
    // 0x202: (never executed before the return)
    // 0x204: RET
    let mut machine = boot(&[0x22, 0x04, 0x00, 0x00, 0x00, 0xEE]);

    assert_eq!(machine.step().unwrap(), Flow::Jump);
    assert_eq!(machine.pc(), 0x204);

    assert_eq!(machine.step().unwrap(), Flow::Jump);
    assert_eq!(machine.pc(), 0x202);
}

#[test]
fn timers_tick_down_to_zero() {
    // LD V3, 03 / LD DT, V3 / LD ST, V3
    let mut machine = boot(&[0x63, 0x03, 0xF3, 0x15, 0xF3, 0x18]);
    machine.step().unwrap();
    machine.step().unwrap();
    assert_eq!(machine.step().unwrap(), Flow::Sound);
    assert_eq!(machine.delay_timer(), 3);
    assert!(machine.sound_active());

    for _ in 0..3 {
        machine.tick_timers();
    }
    assert_eq!(machine.delay_timer(), 0);
    assert_eq!(machine.sound_timer(), 0);
    assert!(!machine.sound_active());

    machine.tick_timers();
    assert_eq!(machine.delay_timer(), 0);
    assert_eq!(machine.sound_timer(), 0);
}

#[test]
fn skip_instructions_change_pc_by_four() {
    // LD V0, 07 / SE V0, 07 / (skipped) / LD V1, 01
    let mut machine = boot(&[0x60, 0x07, 0x30, 0x07, 0x61, 0xFF, 0x61, 0x01]);

    machine.step().unwrap();
    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x206);

    machine.step().unwrap();
    assert_eq!(machine.register(1), 0x01);
}

#[test]
fn jump_with_offset() {
    // LD V0, 04 / JP V0, 202 -> lands on LD V1, AB at 0x206
    let mut machine = boot(&[0x60, 0x04, 0xB2, 0x02, 0x00, 0x00, 0x61, 0xAB]);

    machine.step().unwrap();
    assert_eq!(machine.step().unwrap(), Flow::Jump);
    assert_eq!(machine.pc(), 0x206);

    machine.step().unwrap();
    assert_eq!(machine.register(1), 0xAB);
}

#[test]
fn reset_clears_previous_session() {
    let mut machine = boot(&[0x60, 0xFF]);
    machine.step().unwrap();
    machine.set_key(0x2, true).unwrap();
    assert_eq!(machine.register(0), 0xFF);

    machine.reset(&[0x00, 0xE0]).unwrap();
    assert_eq!(machine.register(0), 0);
    assert_eq!(machine.pc(), MEM_START);
    assert_eq!(machine.delay_timer(), 0);
}

#[test]
fn halted_machine_reports_the_same_error_again() {
    // RET with an empty call stack; the program counter is restored, so
    // stepping again reproduces the same recoverable error.
    let mut machine = boot(&[0x00, 0xEE]);

    assert!(matches!(machine.step(), Err(OktoError::StackUnderflow)));
    assert!(matches!(machine.step(), Err(OktoError::StackUnderflow)));
    assert_eq!(machine.pc(), MEM_START);
}
