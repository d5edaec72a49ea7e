use character_core::{
    Ability, AbilityScores, Character, CharacterConfig, PcgRng, Race, RaceKind, SystemRng,
    random_race_id, select_race,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn dwarf_on_all_tens_raises_only_constitution_modifier() {
    let mut scores = AbilityScores::new(10);
    Race::new(RaceKind::Dwarf).apply_racial_bonus(&mut scores);

    assert_eq!(scores.score(Ability::Constitution), 12);
    assert_eq!(scores.modifier(Ability::Constitution), 1);
    for ability in Ability::ALL {
        if ability != Ability::Constitution {
            assert_eq!(scores.modifier(ability), 0, "{ability}");
        }
    }
}

#[test]
fn hill_dwarf_on_all_eights_crosses_modifier_boundaries_nonlinearly() {
    let mut scores = AbilityScores::new(8);
    assert_eq!(scores.modifier(Ability::Constitution), -1);
    assert_eq!(scores.modifier(Ability::Wisdom), -1);

    Race::new(RaceKind::HillDwarf).apply_racial_bonus(&mut scores);

    // +2 CON moves the modifier up a full step
    assert_eq!(scores.score(Ability::Constitution), 10);
    assert_eq!(scores.modifier(Ability::Constitution), 0);
    // +1 WIS lands on 9, still -1
    assert_eq!(scores.score(Ability::Wisdom), 9);
    assert_eq!(scores.modifier(Ability::Wisdom), -1);
    assert_eq!(scores.score(Ability::Strength), 8);
}

#[test]
fn every_race_applied_twice_doubles_its_delta() {
    for kind in RaceKind::ALL {
        let race = Race::new(kind);
        let base = AbilityScores::new(10);
        let mut once = base;
        race.apply_racial_bonus(&mut once);
        let mut twice = once;
        race.apply_racial_bonus(&mut twice);

        for ability in Ability::ALL {
            let delta = once.score(ability) - base.score(ability);
            assert_eq!(twice.score(ability), base.score(ability) + 2 * delta);
        }
    }
}

#[test]
fn selected_races_are_independently_owned() {
    let mut rng = PcgRng::new(3);
    let first = select_race(0, &mut rng).unwrap();
    let second = select_race(0, &mut rng).unwrap();

    let mut scores = AbilityScores::new(10);
    first.apply_racial_bonus(&mut scores);
    drop(first);
    second.apply_racial_bonus(&mut scores);

    assert!(Ability::ALL.iter().all(|&a| scores.score(a) == 12));
    assert_eq!(second.bonus(), &AbilityScores::new(1));
}

#[test]
fn factory_contract_for_sentinel_and_unknown_ids() {
    init_tracing();
    let mut rng = SystemRng::from_entropy();
    for _ in 0..200 {
        assert!(select_race(-1, &mut rng).is_some());
    }
    assert!(select_race(99, &mut rng).is_none());
}

#[test]
fn random_id_always_dispatches() {
    let mut rng = PcgRng::new(123);
    for _ in 0..1_000 {
        let id = random_race_id(&mut rng);
        assert!(RaceKind::from_id(id as i32).is_some());
    }
}

#[test]
fn rolled_character_scores_are_base_plus_bonus() {
    init_tracing();
    let mut rng = PcgRng::new(0x5eed);
    let config = CharacterConfig::default();

    for _ in 0..200 {
        let hero = Character::roll(-1, &mut rng, &config).unwrap();
        let expected = *hero.base_scores() + *hero.race().bonus();
        assert_eq!(hero.scores(), &expected);
        for (_, entry) in hero.base_scores().iter() {
            assert!((8..=18).contains(&entry.score()));
            assert!(!entry.is_proficient());
        }
        assert_eq!(hero.scores().proficiency_bonus(), 2);
    }
}

#[test]
fn proficient_save_after_racial_bonus() {
    let mut scores = AbilityScores::from_scores([8, 13, 14, 10, 12, 15]);
    scores.set_proficiency_bonus(2);
    scores.set_proficient(Ability::Dexterity, true);
    scores.set_proficient(Ability::Intelligence, true);

    Race::new(RaceKind::HighElf).apply_racial_bonus(&mut scores);

    // DEX 13 + 2 = 15 → +2, proficient → +4
    assert_eq!(scores.save(Ability::Dexterity), 4);
    // INT 10 + 1 = 11 → +0, proficient → +2
    assert_eq!(scores.save(Ability::Intelligence), 2);
    // STR 8 → -1, not proficient
    assert_eq!(scores.save(Ability::Strength), -1);
}
