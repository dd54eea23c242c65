#[derive(Debug, serde::Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct Event {
    pub event: EventInner,
}

#[derive(Debug, serde::Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub enum EventInner {
    SetStatus {
        status: String,
    },

    SetControls {
        controls: u8,
    },

    Reset,

    SetTps {
        tps: f32,
    },

    Splash {
        x: i32,
        y: i32,
        color: u32,
        filled: bool,
        duration_ms: f32,

        #[serde(default)]
        keep_time_ms: f32,
    },

    StopAnimation,

    Fire {
        id: u32,
    },
}

#[cfg(test)]
mod tests {
    use crate::event::Event;
    use crate::event::EventInner;

    #[test]
    fn test_set_status() {
        let e = Event {
            event: EventInner::SetStatus {
                status: String::from("level 2"),
            },
        };
        insta::assert_json_snapshot!(e, @r#"
        {
          "event": {
            "SetStatus": {
              "status": "level 2"
            }
          }
        }
        "#);
    }

    #[test]
    fn test_set_controls() {
        let e = Event {
            event: EventInner::SetControls { controls: 33 },
        };
        insta::assert_json_snapshot!(e, @r#"
        {
          "event": {
            "SetControls": {
              "controls": 33
            }
          }
        }
        "#);
    }

    #[test]
    fn test_reset() {
        let e = Event {
            event: EventInner::Reset,
        };
        insta::assert_json_snapshot!(e, @r#"
        {
          "event": "Reset"
        }
        "#);
    }

    #[test]
    fn test_splash() {
        let e = Event {
            event: EventInner::Splash {
                x: 5,
                y: 5,
                color: 16711680,
                filled: false,
                duration_ms: 1200.0,
                keep_time_ms: 300.0,
            },
        };
        insta::assert_json_snapshot!(e, @r#"
        {
          "event": {
            "Splash": {
              "x": 5,
              "y": 5,
              "color": 16711680,
              "filled": false,
              "duration_ms": 1200.0,
              "keep_time_ms": 300.0
            }
          }
        }
        "#);
    }

    #[test]
    fn test_stop_animation() {
        let e = Event {
            event: EventInner::StopAnimation,
        };
        insta::assert_json_snapshot!(e, @r#"
        {
          "event": "StopAnimation"
        }
        "#);
    }

    #[test]
    fn test_splash_keep_time_defaults_to_zero() {
        let e: Event =
            serde_json::from_str(r#"{"event":{"Splash":{"x":0,"y":0,"color":255,"filled":true,"duration_ms":500.0}}}"#)
                .unwrap();

        let EventInner::Splash { keep_time_ms, .. } = e.event else {
            panic!("not a splash event");
        };
        assert_eq!(keep_time_ms, 0.0);
    }

    #[test]
    fn test_deser_testfile_set_status() {
        let s = include_str!("../test/set_status.json");
        let _: Event = serde_json::from_str(s).unwrap();
    }

    #[test]
    fn test_deser_testfile_set_controls() {
        let s = include_str!("../test/set_controls.json");
        let _: Event = serde_json::from_str(s).unwrap();
    }

    #[test]
    fn test_deser_testfile_splash() {
        let s = include_str!("../test/splash.json");
        let _: Event = serde_json::from_str(s).unwrap();
    }

    #[test]
    fn test_deser_testfile_stop_animation() {
        let s = include_str!("../test/stop_animation.json");
        let _: Event = serde_json::from_str(s).unwrap();
    }

    #[test]
    fn test_deser_testfile_fire() {
        let s = include_str!("../test/fire.json");
        let _: Event = serde_json::from_str(s).unwrap();
    }
}
