use super::*;
use crate::error::MapErrorCode;
use crate::model::{
    Background, Barrel, ChatColor, EngineMark, Image, Lamp, MapBox, Song, Timer, Water,
};
use crate::trigger::{Action, Operand};

fn populated() -> MapDocument {
    let mut document = MapDocument::new();

    let door = Door {
        w: 100,
        h: 10,
        vis: true,
        moving: true,
        tarx: 50,
        tary: -20,
        maxspeed: 3.5,
        ..document.create()
    };
    let region = Region {
        x: 40,
        y: 60,
        w: 20,
        h: 20,
        use_target: Some("trigger_0".to_string()),
        use_on: 1,
        ..document.create()
    };
    let timer = Timer {
        enabled: true,
        maxcalls: -1,
        target: Some("trigger_0".to_string()),
        delay: 30.0,
        ..document.create()
    };
    let mut trigger: Trigger = document.create();
    trigger.enabled = true;
    trigger.maxcalls = 1;
    trigger
        .move_door(&door, &region)
        .and_then(|t| t.activate(&timer))
        .and_then(|t| t.set_variable("score", 0))
        .and_then(|t| t.add("score", Operand::variable("bonus")))
        .and_then(|t| t.send_chat_message("Go & \"win\"", ChatColor::Preset(4)))
        .expect("actions");

    let mut player = document.create_player();
    player.x = 5;
    player.hea = 130.0;
    player.hmax = 130.0;
    player.side = 1;
    let mut enemy = document.create_enemy();
    enemy.team = 2;
    enemy.ondeath = Some("trigger_0".to_string());

    document.insert(door);
    document.insert(region);
    document.insert(timer);
    let vehicle = Vehicle {
        hp_percent: 80.0,
        ..document.create()
    };
    document.insert(vehicle);
    document.insert(MapBox {
        x: -10,
        y: 20,
        w: 300,
        h: 20,
        m: 2,
    });
    document.insert(Water {
        w: 30,
        h: 30,
        damage: 1.5,
        friction: true,
        ..Water::default()
    });
    let decoration = Decoration {
        model: "stone".to_string(),
        sx: 1.0,
        sy: 1.0,
        f: 2,
        attach: Some("door_0".to_string()),
        ..document.create()
    };
    document.insert(decoration);
    let song = Song {
        url: "music/theme.mp3".to_string(),
        volume: 0.75,
        looping: true,
        ..document.create()
    };
    document.insert(song);
    let lamp = Lamp {
        power: 0.4,
        flare: true,
        ..document.create()
    };
    document.insert(lamp);
    let barrel: Barrel = document.create();
    document.insert(barrel);
    let gun = Gun {
        model: "gun_rifle".to_string(),
        upg: 1,
        ..document.create()
    };
    document.insert(gun);
    let pusher = Pusher {
        w: 10,
        h: 10,
        toy: -5.0,
        damage: 2.0,
        ..document.create()
    };
    document.insert(pusher);
    document.insert(Background {
        c: "#A0A0A0".to_string(),
        m: "rock".to_string(),
        s: true,
        ..Background::default()
    });
    document.insert(enemy);
    document.insert(player);
    document.insert(EngineMark {
        modifier: crate::model::engine_marks::CASUAL_MODE.to_string(),
        parameter: "0".to_string(),
        ..EngineMark::default()
    });
    document.insert(trigger);
    document.insert(Image {
        width: 64,
        height: 32,
        id: 7,
        ..Image::default()
    });
    document
}

#[test]
fn every_kind_round_trips_through_markup() {
    let original = populated();
    assert_eq!(original.len(), 18);
    let markup = original.export().expect("export");
    let restored = MapDocument::import(&markup).expect("import");

    assert_eq!(restored.len(), original.len());
    for (before, after) in original.iter().zip(restored.iter()) {
        assert_eq!(before, after);
    }
    assert_eq!(restored.export().expect("second export"), markup);
}

#[test]
fn export_groups_by_catalog_order_not_insertion_order() {
    let markup = populated().export().expect("export");
    let tags = markup
        .lines()
        .map(|line| {
            line.trim_start_matches('<')
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .collect::<Vec<_>>();
    assert_eq!(
        tags,
        vec![
            "door", "region", "timer", "vehicle", "box", "water", "decor", "song", "lamp",
            "barrel", "gun", "pusher", "bg", "actor", "player", "inf", "trigger", "image",
        ]
    );
    assert!(markup.ends_with(" />\n"));
}

#[test]
fn auto_uids_count_per_kind_and_never_reuse() {
    let mut document = MapDocument::new();
    let first: Door = document.create();
    let second: Door = document.create();
    let third: Door = document.create();
    assert_eq!(
        [first.uid.as_str(), second.uid.as_str(), third.uid.as_str()],
        ["door_0", "door_1", "door_2"]
    );
    document.insert(first);
    document.insert(second);
    document.insert(third);
    document.remove(Kind::Door, "door_1").expect("remove");

    let fourth: Door = document.create();
    assert_eq!(fourth.uid, "door_3");
    let lamp: Lamp = document.create();
    assert_eq!(lamp.uid, "lamp_0");
}

#[test]
fn imported_uids_advance_the_sequencer() {
    let mut document =
        MapDocument::import(r#"<door uid="door_7" /><door uid="lift" />"#).expect("import");
    let next: Door = document.create();
    assert_eq!(next.uid, "door_8");
}

#[test]
fn lookups_report_kind_and_uid_on_miss() {
    let document = populated();
    assert_eq!(document.find_door("door_0").expect("door").w, 100);
    assert_eq!(document.find_player("player_0").expect("player").x, 5);
    assert_eq!(document.find_enemy("actor_0").expect("enemy").team, 2);
    assert!(document.find_trigger("trigger_0").is_ok());

    let err = document.find_region("nowhere").expect_err("missing");
    assert_eq!(err.code(), MapErrorCode::LookupNotFound);
    match err {
        MapError::LookupNotFound { kind, uid } => {
            assert_eq!(kind, Kind::Region);
            assert_eq!(uid, "nowhere");
        }
        other => panic!("unexpected error {other:?}"),
    }

    let err = document.find_player("actor_0").expect_err("wrong role");
    assert!(err.to_string().contains("actor_0"), "{err}");
}

#[test]
fn edits_through_find_mut_are_exported() {
    let mut document = populated();
    document
        .find_trigger_mut("trigger_0")
        .expect("trigger")
        .get_message("said")
        .expect("action");
    document.find_mut::<Lamp>("lamp_0").expect("lamp").power = 1.0;

    let markup = document.export().expect("export");
    assert!(markup.contains(r#"actions_6_type="160" actions_6_targetA="said""#));
    assert!(markup.contains(r#"<lamp uid="lamp_0" x="0" y="0" power="1" flare="true" />"#));
}

#[test]
fn long_triggers_split_and_reimport_as_siblings() {
    let mut trigger = Trigger {
        enabled: true,
        ..Trigger::with_uid("counter")
    };
    for i in 0..27 {
        trigger.add("n", i).expect("add");
    }
    let document = MapDocument::from_iter([MapEntity::from(trigger)]);
    let markup = document.export().expect("export");
    assert_eq!(markup.lines().count(), 3);

    let restored = MapDocument::import(&markup).expect("import");
    let chunks = restored.entities(Kind::Trigger);
    assert_eq!(chunks.len(), 3);
    for chunk in chunks {
        assert_eq!(chunk.uid(), Some("counter"));
        let chunk = Trigger::downcast(chunk).expect("trigger");
        assert_eq!(chunk.actions.len(), 9);
        assert!(chunk.enabled);
    }
    let first = restored.find_trigger("counter").expect("first chunk");
    assert_eq!(first.actions[0], Action::new(102, vec!["n".into(), "0".into()]));
}

#[test]
fn illegal_split_aborts_export() {
    let mut trigger = Trigger::with_uid("gate");
    for _ in 0..8 {
        trigger.get_current("slot").expect("action");
    }
    trigger.skip_if_not_equals("slot", 0).expect("skip");
    for _ in 0..9 {
        trigger.get_message("said").expect("action");
    }
    let mut document = MapDocument::new();
    document.insert(trigger);
    let err = document.export().expect_err("illegal split");
    assert_eq!(err.code(), MapErrorCode::InvalidActionSplit);
}

#[test]
fn aliases_and_case_are_accepted_on_import() {
    let document = MapDocument::import(
        r#"<?xml version="1.0"?>
<PUSHF uid="p" w="5" />
<enemy uid="e" hea="50" />
<Player uid="me" />"#,
    )
    .expect("import");
    assert_eq!(document.find_pusher("p").expect("pusher").w, 5);
    assert_eq!(document.find_enemy("e").expect("enemy").hea, 50.0);
    assert!(document.find_player("me").is_ok());
}

#[test]
fn coercion_failures_name_the_offending_element() {
    let err = MapDocument::import("<lamp uid=\"a\" />\n<lamp uid=\"b\" power=\"bright\" />")
        .expect_err("bad power");
    match err {
        MapError::MalformedAttribute {
            kind,
            attribute,
            value,
            element_index,
            location,
            ..
        } => {
            assert_eq!(kind, Kind::Lamp);
            assert_eq!(attribute, "power");
            assert_eq!(value, "bright");
            assert_eq!(element_index, 1);
            assert_eq!(location.line, 2);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn multi_line_chat_text_survives_export_and_import() {
    let mut trigger = Trigger::with_uid("greeting");
    trigger
        .send_chat_message("line1\nline2\ttab\r\nend", ChatColor::WHITE)
        .expect("chat");
    let mut song = Song::with_uid("theme");
    song.url = "music/a b\tc.mp3".to_string();

    let mut document = MapDocument::new();
    document.insert(trigger.clone());
    document.insert(song.clone());
    let markup = document.export().expect("export");
    assert_eq!(markup.lines().count(), 2, "{markup}");
    assert!(markup.contains("line1&#10;line2&#9;tab&#13;&#10;end"), "{markup}");

    let restored = MapDocument::import(&markup).expect("import");
    assert_eq!(restored.find_trigger("greeting").expect("trigger"), &trigger);
    assert_eq!(restored.find::<Song>("theme").expect("song"), &song);
}

#[test]
fn unwritable_characters_fail_export_instead_of_producing_bad_markup() {
    let mut trigger = Trigger::with_uid("bell");
    trigger
        .send_chat_message("ring\u{1}", ChatColor::WHITE)
        .expect("chat");
    let mut document = MapDocument::new();
    document.insert(trigger);

    let err = document.export().expect_err("control character");
    assert_eq!(err.code(), MapErrorCode::InvalidArgumentShape);
    assert!(err.to_string().contains("U+0001"), "{err}");

    let lamp = Lamp {
        power: 1.0,
        ..Lamp::with_uid("lamp\u{fffe}")
    };
    let err = MapDocument::from_iter([MapEntity::from(lamp)])
        .export()
        .expect_err("noncharacter");
    assert!(err.to_string().contains("lamp.uid"), "{err}");
}
