//! Scene fixtures

/// Three containers, one free-standing behaviour, four assets.
pub const SIMPLE_SCENE: &str = "\
%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!29 &1
OcclusionCullingSettings:
  m_ObjectHideFlags: 0
  m_OcclusionCullingData: {fileID: 0}
--- !u!104 &2
RenderSettings:
  m_Fog: 0
  m_SkyboxMaterial: {fileID: 10304, guid: 0000000000000000f000000000000000, type: 0}
--- !u!1 &705507993
GameObject:
  m_ObjectHideFlags: 0
  m_Component:
  - component: {fileID: 705507995}
  - component: {fileID: 705507994}
  m_Layer: 0
  m_Name: Directional Light
--- !u!108 &705507994
Light:
  m_GameObject: {fileID: 705507993}
  m_Enabled: 1
--- !u!4 &705507995
Transform:
  m_GameObject: {fileID: 705507993}
  m_Father: {fileID: 0}
--- !u!1 &963194225
GameObject:
  m_Component:
  - component: {fileID: 963194228}
  - component: {fileID: 963194227}
  - component: {fileID: 963194226}
  m_Name: Main Camera
--- !u!81 &963194226
AudioListener:
  m_GameObject: {fileID: 963194225}
--- !u!20 &963194227
Camera:
  m_GameObject: {fileID: 963194225}
  m_TargetTexture: {fileID: 0}
--- !u!4 &963194228
Transform:
  m_GameObject: {fileID: 963194225}
  m_Children: []
  m_Father: {fileID: 0}
--- !u!114 &963194229
MonoBehaviour:
  m_GameObject: {fileID: 963194225}
  m_Script: {fileID: 11500000, guid: 801a0a604e828724da83b96f51cee06d, type: 3}
--- !u!1 &1200000001
GameObject:
  m_Component:
  - component: {fileID: 1200000002}
  - component: {fileID: 1200000003}
  - component: {fileID: 1200000004}
  - component: {fileID: 1200000005}
  m_Name: Player
--- !u!4 &1200000002
Transform:
  m_GameObject: {fileID: 1200000001}
  m_Father: {fileID: 963194228}
--- !u!114 &1200000003
MonoBehaviour:
  m_GameObject: {fileID: 1200000001}
  m_Script: {fileID: 11500000, guid: 801a0a604e828724da83b96f51cee06d, type: 3}
  m_Target: {fileID: 963194227}
--- !u!114 &1200000004
MonoBehaviour:
  m_GameObject: {fileID: 1200000001}
  m_Script: {fileID: 11500000, guid: 9eaebf3930936434da023d89df8a186c, type: 3}
--- !u!23 &1200000005
MeshRenderer:
  m_GameObject: {fileID: 1200000001}
  m_Materials:
  - {fileID: 2100000, guid: 31321ba15b8f8eb4c954353edc038b1d, type: 2}
";

pub const SIMPLE_OBJECTS: usize = 15;

pub const SIMPLE_CONTAINERS: &[(u64, &[u64])] = &[
    (705507993, &[705507995, 705507994]),
    (963194225, &[963194228, 963194227, 963194226]),
    (1200000001, &[1200000002, 1200000003, 1200000004, 1200000005]),
];

pub const SIMPLE_GUID_USAGE: &[(&str, usize)] = &[
    ("801a0a604e828724da83b96f51cee06d", 2),
    ("9eaebf3930936434da023d89df8a186c", 1),
    ("0000000000000000f000000000000000", 1),
    ("31321ba15b8f8eb4c954353edc038b1d", 1),
    ("385dae4ffcaf7134db7c8d7d0cc5fcc9", 0),
];

/// `(anchor, expected reference count)`
pub const SIMPLE_REFERENCE_COUNTS: &[(u64, usize)] = &[
    // type markers
    (11500000, 3),
    (10304, 1),
    (2100000, 1),
    // containers
    (705507993, 2),
    (963194225, 4),
    (1200000001, 4),
    // components credited by their owner
    (705507994, 1),
    (705507995, 1),
    (1200000002, 1),
    (963194227, 2),
    (963194228, 2),
    // references a container that does not own it
    (963194229, 0),
    (1, 0),
    (157, 0),
];
