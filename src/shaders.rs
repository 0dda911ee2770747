//! GLSL ES 1.00 sources for the monolith scene.

/// Full-screen quad as a triangle strip in clip space.
pub const QUAD_VERTICES: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

pub const SPACE_VERTEX: &str = r#"
attribute vec4 position;
varying vec2 vUv;

void main() {
    vUv = position.xy * 0.5 + 0.5;
    gl_Position = position;
}
"#;

/// Value-noise nebula over a dark blue base, plus a handful of drifting stars.
pub const SPACE_FRAGMENT: &str = r#"
precision highp float;
varying vec2 vUv;
uniform float time;

float random(vec2 st) {
    return fract(sin(dot(st.xy, vec2(12.9898, 78.233))) * 43758.5453123);
}

float noise(vec2 st) {
    vec2 i = floor(st);
    vec2 f = fract(st);
    float a = random(i);
    float b = random(i + vec2(1.0, 0.0));
    float c = random(i + vec2(0.0, 1.0));
    float d = random(i + vec2(1.0, 1.0));
    vec2 u = f * f * (3.0 - 2.0 * f);
    return mix(a, b, u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y;
}

void main() {
    vec2 uv = vUv;
    vec3 color = vec3(0.0, 0.0, 0.1);

    float nebula = 0.0;
    for (float i = 1.0; i < 4.0; i++) {
        nebula += noise(uv * 3.0 * i + time * 0.1) / i;
    }
    color += vec3(0.2, 0.0, 0.3) * nebula;

    for (float i = 1.0; i < 8.0; i++) {
        vec2 starPos = vec2(
            random(vec2(i, 1.0)) + sin(time * 0.2 + i) * 0.1,
            random(vec2(i, 2.0)) + cos(time * 0.15 + i) * 0.1
        );
        float star = 1.0 - smoothstep(0.0, 0.05, length(uv - starPos));
        color += vec3(1.0) * star * 0.5;
    }

    gl_FragColor = vec4(color, 1.0);
}
"#;

pub const RHOMBUS_VERTEX: &str = r#"
attribute vec4 position;
attribute vec3 normal;
uniform mat4 modelViewMatrix;
uniform mat4 projectionMatrix;
varying vec3 vNormal;
varying vec3 vPosition;

void main() {
    vPosition = position.xyz;
    vNormal = (modelViewMatrix * vec4(normal, 0.0)).xyz;
    gl_Position = projectionMatrix * modelViewMatrix * position;
}
"#;

/// Near-black metal with a fresnel rim against a fixed +Z view direction.
pub const RHOMBUS_FRAGMENT: &str = r#"
precision highp float;
varying vec3 vNormal;
varying vec3 vPosition;
uniform float time;

void main() {
    vec3 normal = normalize(vNormal);
    vec3 viewDir = vec3(0.0, 0.0, 1.0);

    vec3 baseColor = vec3(0.02);
    float fresnel = pow(1.0 - abs(dot(normal, viewDir)), 3.0);

    gl_FragColor = vec4(mix(baseColor, vec3(0.3), fresnel), 1.0);
}
"#;
