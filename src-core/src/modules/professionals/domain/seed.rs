use super::profile::{Availability, ProfessionalProfile};

/// 档案表不存在时写入的演示档案
pub fn demo_profiles() -> Vec<ProfessionalProfile> {
    vec![
        ProfessionalProfile::new("101", "Dr. Roberto Silva", "Médico")
            .with_description("Clínico geral com foco em atendimento domiciliar de urgência. Experiência em pronto-socorro.")
            .with_location("São Paulo, SP")
            .with_avatar("https://picsum.photos/100/100?random=1")
            .verified()
            .with_whatsapp("11999999999")
            .with_video_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .with_price(300.0, "consulta")
            .with_availability(Availability::Imediata)
            .with_coordinates(-23.5505, -46.6333),
        ProfessionalProfile::new("102", "Maria Oliveira", "Cuidadora")
            .with_description("Especialista em cuidados com idosos e suporte pós-cirúrgico. Disponibilidade noturna.")
            .with_location("Rio de Janeiro, RJ")
            .with_avatar("https://picsum.photos/100/100?random=2")
            .verified()
            .with_whatsapp("21988888888")
            .with_price(80.0, "hora")
            .with_availability(Availability::Agendamento)
            .with_coordinates(-22.9068, -43.1729),
        ProfessionalProfile::new("103", "Carlos Mendes", "Eletricista")
            .with_description("Resolução de curtos-circuitos, instalação de chuveiros e quadros de força.")
            .with_location("Belo Horizonte, MG")
            .with_avatar("https://picsum.photos/100/100?random=3")
            .with_whatsapp("")
            .with_price(150.0, "visita")
            .with_availability(Availability::Imediata)
            .with_coordinates(-19.9167, -43.9345),
        ProfessionalProfile::new("104", "Dra. Ana Costa", "Psicóloga")
            .with_description("Terapia cognitivo-comportamental para ansiedade, pânico e depressão. Atendimento online.")
            .with_location("Online / SP")
            .with_avatar("https://picsum.photos/100/100?random=4")
            .verified()
            .with_whatsapp("11977777777")
            .with_price(200.0, "sessão")
            .with_availability(Availability::Agendamento)
            .with_coordinates(-23.58, -46.65),
        ProfessionalProfile::new("105", "João Pedro", "Motoboy")
            .with_description("Entregas expressas de farmácia e mercado. Rapidez e segurança.")
            .with_location("Porto Alegre, RS")
            .with_avatar("https://picsum.photos/100/100?random=5")
            .with_whatsapp("51966666666")
            .with_price(20.0, "corrida")
            .with_availability(Availability::Imediata)
            .with_coordinates(-30.0346, -51.2177),
        ProfessionalProfile::new("106", "Marcos Encanamentos", "Encanador")
            .with_description("Caça vazamentos, desentupimento de esgoto e pias. Atendimento 24h.")
            .with_location("Curitiba, PR")
            .with_avatar("https://picsum.photos/100/100?random=6")
            .verified()
            .with_whatsapp("")
            .with_price(120.0, "hora")
            .with_availability(Availability::Imediata)
            .with_coordinates(-25.4284, -49.2733),
    ]
}
