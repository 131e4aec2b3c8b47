// src/names.rs
//! Friendly names for resource types, well-known resource hashes and game
//! folders.

/// Resource type ids as found (little-endian) in an entry's type field
const RESOURCE_TYPES: &[(u32, &str)] = &[
    // Graphics
    (0x01, "Texture"),
    (0x02, "Material"),
    (0x03, "VertexDescriptor"),
    (0x04, "VertexProgramState"),
    (0x05, "Renderable"),
    (0x06, "MaterialState"),
    (0x07, "SamplerState"),
    (0x08, "ShaderProgramBuffer"),
    // GeneSys
    (0x10, "AttribSysSchema"),
    (0x11, "AttribSysVault"),
    (0x12, "GeneSysDefinition"),
    (0x13, "GeneSysInstance"),
    (0x14, "GenesysType"),
    (0x15, "GenesysObject"),
    (0x16, "BinaryFile"),
    // Indexing
    (0x20, "EntryList"),
    (0x21, "BundleIndex"),
    (0x30, "Font"),
    (0x40, "LuaCode"),
    (0x50, "InstanceList"),
    (0x51, "Model"),
    (0x52, "ColourCube"),
    (0x53, "Shader"),
    // Collision
    (0x60, "PolygonSoupList"),
    (0x61, "PolygonSoupTree"),
    (0x62, "IdList"),
    (0x68, "NavigationMesh"),
    // Text
    (0x70, "TextFile"),
    (0x71, "TextFileList"),
    (0x72, "ResourceHandleList"),
    (0x74, "LuaData"),
    // Sound
    (0x80, "Ginsu"),
    (0x81, "Wave"),
    (0x82, "WaveContainerTable"),
    (0x83, "GameplayLinkData"),
    (0x84, "WaveDictionary"),
    (0x85, "MicroMonoStream"),
    (0x86, "Reverb"),
    (0x90, "ZoneList"),
    (0x91, "WorldPaintMap"),
    (0xA0, "IceAnimDictionary"),
    // Animation
    (0xB0, "AnimationList"),
    (0xB1, "PathAnimation"),
    (0xB2, "Skeleton"),
    (0xB3, "Animation"),
    (0xC0, "CgsVertexProgramState"),
    (0xC1, "CgsProgramBuffer"),
    // Vehicles and environment
    (0x105, "VehicleList"),
    (0x106, "VehicleGraphicsSpec"),
    (0x107, "VehiclePhysicsSpec"),
    (0x109, "WheelList"),
    (0x10A, "WheelGraphicsSpec"),
    (0x112, "EnvironmentKeyframe"),
    (0x113, "EnvironmentTimeLine"),
    (0x114, "EnvironmentDictionary"),
    (0x116, "FlaptFile"),
    // Game data
    (0x200, "AIData"),
    (0x201, "Language"),
    (0x202, "TriggerData"),
    (0x203, "RoadData"),
    (0x204, "DynamicInstanceList"),
    (0x205, "WorldObject"),
    (0x206, "ZoneHeader"),
    (0x207, "VehicleSound"),
    (0x208, "RoadMapData"),
    (0x209, "CharacterSpec"),
    (0x20A, "CharacterList"),
    (0x20B, "SurfaceSounds"),
    (0x20C, "ReverbRoadData"),
    (0x20D, "CameraTake"),
    (0x20E, "CameraTakeList"),
    (0x20F, "GroundcoverCollection"),
    (0x210, "ControlMesh"),
    (0x211, "CutsceneData"),
    (0x212, "CutsceneList"),
    (0x213, "LightInstanceList"),
    (0x214, "GroundcoverInstances"),
    (0x215, "CompoundObject"),
    (0x216, "CompoundInstanceList"),
    (0x217, "PropObject"),
    (0x218, "PropInstanceList"),
    (0x219, "ZoneAmbienceList"),
    // Effects and physics
    (0x301, "BearEffect"),
    (0x302, "BearGlobalParameters"),
    (0x303, "ConvexHull"),
    // Traffic
    (0x501, "HSMData"),
    (0x700, "TrafficGraphicsStub"),
    (0x701, "TrafficLaneData"),
];

const KNOWN_HASHES: &[(u32, &str)] = &[
    (0x30DF_0100, "Aston Martin Vantage"),
    (0x1122_3344, "Chevrolet Camaro Z28"),
];

const FOLDER_NAMES: &[(&str, &str)] = &[
    ("SHAREDWAVES", "Shared Audio"),
    ("SURFACELIST", "Surface Materials"),
    ("VEHICLES", "Vehicle Data"),
    ("PVS", "Visibility Sets"),
    ("ZONES", "Map Zones"),
];

pub fn resource_type_name(id: u32) -> Option<&'static str> {
    RESOURCE_TYPES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, name)| *name)
}

/// Type name, or `Unknown (0x1F)` style fallback
pub fn describe_resource_type(id: u32) -> String {
    match resource_type_name(id) {
        Some(name) => name.to_string(),
        None => format!("Unknown (0x{:X})", id),
    }
}

/// Known name for a resource hash, or the hash as `0x%08X`
pub fn resource_hash_name(hash: u32) -> String {
    KNOWN_HASHES
        .iter()
        .find(|(key, _)| *key == hash)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("0x{:08X}", hash))
}

/// Friendly label for a well-known game folder (case-insensitive)
pub fn folder_display_name(folder: &str) -> String {
    let upper = folder.to_ascii_uppercase();
    FOLDER_NAMES
        .iter()
        .find(|(key, _)| *key == upper)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| folder.to_string())
}

/// Decode a rendered name like `00_72_01_00` by reading its second byte as
/// a resource type. Anything else is returned unchanged.
pub fn decode_file_name(file_name: &str) -> String {
    let parts: Vec<&str> = file_name.split('_').collect();
    if parts.len() != 4 {
        return file_name.to_string();
    }
    match u32::from_str_radix(parts[1], 16) {
        Ok(type_id) => describe_resource_type(type_id),
        Err(_) => file_name.to_string(),
    }
}
