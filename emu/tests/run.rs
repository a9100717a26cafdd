use arch::reg::Reg;
use hackemu::hooks::Hook;
use hackemu::model::State;

fn run(words: &[u16], tmax: u64) -> State {
    let mut state = State::new();
    assert!(state.load_rom(words).is_ok());
    let mut hooks: Vec<Box<dyn Hook>> = vec![];
    match hackemu::run(state, &mut hooks, Some(tmax)) {
        Ok((state, _)) => state,
        Err(msg) => panic!("{}", msg),
    }
}

#[test]
fn sum_one_to_ten() {
    // i = 1; sum = 0; while i <= 10 { sum += i; i++ }
    let prog = [
        16, 0xEFC8, // @i M=1
        17, 0xEA88, // @sum M=0
        16, 0xFC10, // (LOOP) @i D=M
        10, 0xE4D0, // @10 D=D-A
        18, 0xE301, // @END D;JGT
        16, 0xFC10, // @i D=M
        17, 0xF088, // @sum M=D+M
        16, 0xFDC8, // @i M=M+1
        4, 0xEA87, // @LOOP 0;JMP
        18, 0xEA87, // (END) @END 0;JMP
    ];
    let state = run(&prog, 10_000);
    assert!(state.is_terminated());
    assert_eq!(state.get(17u16), 55);
    assert_eq!(state.get(16u16), 11);
}

#[test]
fn address_wraps_to_15_bits() {
    // @32767 D=A D=D+1 A=D M=1
    let state = run(&[0x7FFF, 0xEC10, 0xE7D0, 0xE320, 0xEFC8], 100);
    assert_eq!(state.get(Reg::SP), 1);
}
